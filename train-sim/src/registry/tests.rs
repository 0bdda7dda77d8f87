//! Scenario tests for the registry and train handles.

use super::*;
use crate::domain::{
    Classification, DriveType, Length, Manufacturer, RailVehicle, SerialNumber, Weight,
    YearOfManufacturing,
};

fn kg(value: f64) -> Weight {
    Weight::new(value).unwrap()
}

fn oebb() -> RailroadCompany {
    RailroadCompany::new("OEBB").unwrap()
}

fn siemens() -> Manufacturer {
    Manufacturer::new("Siemens")
}

/// 30 t electric with four seats and 150 t of tractive force.
fn taurus(serial: &str) -> Locomotive {
    Locomotive::new(
        RailVehicle::builder(siemens(), YearOfManufacturing::new(2005), SerialNumber::new(serial))
            .empty_weight(kg(30_000.0))
            .length(Length::from(30))
            .max_passengers(4)
            .classification(Classification::new("Taurus"))
            .build()
            .unwrap(),
        kg(150_000.0),
        DriveType::Electricity,
    )
}

fn passenger_car(serial: &str) -> Wagon {
    Wagon::passenger_car(
        RailVehicle::builder(siemens(), YearOfManufacturing::new(2000), SerialNumber::new(serial))
            .empty_weight(kg(20_000.0))
            .length(Length::from(50))
            .max_passengers(120)
            .max_additional_load(kg(12_000.0))
            .build()
            .unwrap(),
    )
}

fn freight_only_loco(serial: &str) -> Locomotive {
    Locomotive::new(
        RailVehicle::builder(siemens(), YearOfManufacturing::new(2020), SerialNumber::new(serial))
            .empty_weight(kg(40_000.0))
            .length(Length::from(60))
            .classification(Classification::new(""))
            .build()
            .unwrap(),
        kg(300_000.0),
        DriveType::Electricity,
    )
}

#[test]
fn passenger_train_figures() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();

    assert_eq!(train.max_additional_load(), kg(300.0));
    assert_eq!(train.max_additional_freight(), Weight::ZERO);

    assert!(train.add_wagon(passenger_car("1")).unwrap());
    assert!(train.add_wagon(passenger_car("2")).unwrap());

    assert_eq!(train.wagons().len(), 2);
    assert_eq!(train.max_passengers(), 244);
    assert_eq!(train.max_additional_load(), kg(42_300.0));
    assert_eq!(train.empty_weight(), kg(70_000.0));
    assert_eq!(train.length(), Length::from(130));
    assert_eq!(train.total_weight(), kg(112_300.0));
    assert_eq!(train.tractive_force(), kg(150_000.0));
    assert!(train.is_drivable());
    assert!(train.requires_guard());
    assert_eq!(train.required_guards(), 5);

    assert!(train.remove_wagon(&passenger_car("2")));
    assert_eq!(train.wagons(), vec![passenger_car("1")]);

    let beds = Wagon::sleeping_car(
        RailVehicle::builder(
            Manufacturer::new("Heavens Bedrooms"),
            YearOfManufacturing::new(2005),
            SerialNumber::new("Beds #1"),
        )
        .empty_weight(kg(30_000.0))
        .length(Length::from(70))
        .max_passengers(60)
        .max_additional_load(kg(20_000.0))
        .classification(Classification::new("Comfortable Beds"))
        .build()
        .unwrap(),
    );
    let food = Wagon::dining_car(
        RailVehicle::builder(
            siemens(),
            YearOfManufacturing::new(2009),
            SerialNumber::new("FoodWagon123"),
        )
        .empty_weight(kg(50_000.0))
        .length(Length::from(70))
        .max_passengers(80)
        .max_additional_load(kg(5_000.0))
        .classification(Classification::new("Food & Beverage"))
        .build()
        .unwrap(),
    );
    train.add_wagon(beds).unwrap();
    train.add_wagon(food).unwrap();
    assert_eq!(train.wagons().len(), 3);
}

#[test]
fn figures_are_stable_without_mutation() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    train.add_wagon(passenger_car("1")).unwrap();

    assert_eq!(train.empty_weight(), train.empty_weight());
    assert_eq!(train.length(), train.length());
    assert_eq!(train.total_weight(), train.total_weight());
    assert_eq!(train.required_guards(), train.required_guards());
    assert_eq!(train.report(), train.report());
}

#[test]
fn add_locomotive_twice_fails() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();

    let err = train.add_locomotive(taurus("T1")).unwrap_err();
    assert_eq!(err, TrainError::LocomotiveInUse);
    assert_eq!(train.locomotives().len(), 1);
}

#[test]
fn locomotive_cannot_start_second_train() {
    let registry = Registry::new();
    registry.create_train(oebb(), taurus("T1")).unwrap();

    let err = registry.create_train(oebb(), taurus("T1")).unwrap_err();
    assert!(err.is_already_in_use());
    assert_eq!(registry.len(), 1);
}

#[test]
fn add_wagon_twice_fails() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();

    train.add_wagon(passenger_car("3")).unwrap();
    let err = train.add_wagon(passenger_car("3")).unwrap_err();
    assert_eq!(err, TrainError::WagonInUse);
    assert_eq!(train.wagons().len(), 1);
}

#[test]
fn wagon_cannot_join_another_train() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    train.add_wagon(passenger_car("4")).unwrap();

    let old_timer = Locomotive::new(
        RailVehicle::builder(
            siemens(),
            YearOfManufacturing::new(1830),
            SerialNumber::new("OldTrain"),
        )
        .empty_weight(kg(20_000.0))
        .length(Length::from(40))
        .max_passengers(2)
        .classification(Classification::new("Old-Timer"))
        .build()
        .unwrap(),
        kg(80_000.0),
        DriveType::Diesel,
    );
    let old_train = registry.create_train(oebb(), old_timer).unwrap();

    let err = old_train.add_wagon(passenger_car("4")).unwrap_err();
    assert_eq!(err, TrainError::WagonInUse);
    assert!(old_train.wagons().is_empty());
}

#[test]
fn wagon_kind_does_not_hide_reuse() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    let car = passenger_car("5");
    train.add_wagon(car.clone()).unwrap();

    let relabelled = Wagon::dining_car(car.vehicle().clone());
    assert!(registry.is_wagon_in_use(&relabelled));
    assert_eq!(train.add_wagon(relabelled), Err(TrainError::WagonInUse));
}

#[test]
fn weak_locomotive_is_not_drivable() {
    let registry = Registry::new();
    let very_old = Locomotive::new(
        RailVehicle::builder(
            siemens(),
            YearOfManufacturing::new(1720),
            SerialNumber::new("VeryOldTrain"),
        )
        .empty_weight(kg(20_000.0))
        .length(Length::from(20))
        .max_passengers(2)
        .build()
        .unwrap(),
        kg(8_000.0),
        DriveType::Steam,
    );
    let train = registry.create_train(oebb(), very_old).unwrap();
    train.add_wagon(passenger_car("5")).unwrap();

    // 122 seats * 75 kg + 12 t freight
    assert_eq!(train.max_additional_load(), kg(21_150.0));
    assert!(!train.is_drivable());
}

#[test]
fn remove_only_locomotive_fails() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();

    let err = train.remove_locomotive(&taurus("T1")).unwrap_err();
    assert!(matches!(err, TrainError::InvalidState(_)));
    assert_eq!(err.to_string(), "invalid state: cannot remove last locomotive from train");
    assert_eq!(train.locomotives().len(), 1);
}

#[test]
fn freight_train_needs_no_guard() {
    let registry = Registry::new();
    let first = freight_only_loco("Brand New Train #1");
    let second = freight_only_loco("Brand New Train #2");
    let train = registry.create_train(oebb(), first.clone()).unwrap();

    train
        .add_wagon(Wagon::freight_wagon(
            RailVehicle::builder(
                Manufacturer::new("SteelWagon"),
                YearOfManufacturing::new(1990),
                SerialNumber::new("Wood1"),
            )
            .empty_weight(kg(15_000.0))
            .length(Length::from(120))
            .max_additional_load(kg(80_000.0))
            .classification(Classification::new("Loads wood"))
            .build()
            .unwrap(),
        ))
        .unwrap();
    assert!(!train.requires_guard());

    assert!(train.add_locomotive(second.clone()).unwrap());
    assert_eq!(train.locomotives().len(), 2);

    assert!(train.remove_locomotive(&first).unwrap());
    assert_eq!(train.locomotives(), vec![second]);

    // the uncoupled locomotive is free again
    assert!(!registry.is_locomotive_in_use(&first));
    assert!(registry.validate_locomotive_assignable(&first).is_ok());
}

#[test]
fn removing_absent_vehicles_reports_false() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    train.add_locomotive(taurus("T2")).unwrap();

    assert!(!train.remove_locomotive(&taurus("T3")).unwrap());
    assert!(!train.remove_wagon(&passenger_car("nope")));
    assert_eq!(train.locomotives().len(), 2);
}

#[test]
fn membership_queries() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    train.add_wagon(passenger_car("1")).unwrap();

    assert!(registry.is_locomotive_in_use(&taurus("T1")));
    assert!(!registry.is_locomotive_in_use(&taurus("T2")));
    assert!(registry.is_wagon_in_use(&passenger_car("1")));
    assert!(!registry.is_wagon_in_use(&passenger_car("2")));

    assert_eq!(
        registry.validate_locomotive_assignable(&taurus("T1")),
        Err(TrainError::LocomotiveInUse)
    );
    assert_eq!(
        registry.validate_wagon_assignable(&passenger_car("1")),
        Err(TrainError::WagonInUse)
    );
    assert!(registry.validate_wagon_assignable(&passenger_car("2")).is_ok());
}

#[test]
fn registries_are_independent() {
    let a = Registry::new();
    let b = Registry::new();

    a.create_train(oebb(), taurus("T1")).unwrap();
    assert!(b.create_train(oebb(), taurus("T1")).is_ok());
    assert_ne!(a.trains()[0], b.trains()[0]);
}

#[test]
fn handles_share_state() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    let handle = registry.trains().pop().unwrap();

    assert_eq!(handle, train);
    assert_eq!(handle.id().index(), 0);
    assert_eq!(handle.company(), oebb());

    train.add_wagon(passenger_car("1")).unwrap();
    assert_eq!(handle.wagons().len(), 1);
    assert_eq!(handle.consist(), train.consist());
}

#[test]
fn structural_identity_compares_every_attribute() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    train.add_wagon(passenger_car("1")).unwrap();

    // Same serial, different build year: a different vehicle structurally
    let rebuilt = Wagon::passenger_car(
        RailVehicle::builder(siemens(), YearOfManufacturing::new(2001), SerialNumber::new("1"))
            .build()
            .unwrap(),
    );
    assert!(train.add_wagon(rebuilt).unwrap());
}

#[test]
fn serial_number_identity() {
    let config = RegistryConfig::default().with_identity(VehicleIdentity::SerialNumber);
    let registry = Registry::with_config(config);
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    train.add_wagon(passenger_car("1")).unwrap();

    let same_serial = Wagon::passenger_car(
        RailVehicle::builder(siemens(), YearOfManufacturing::new(2001), SerialNumber::new("1"))
            .build()
            .unwrap(),
    );
    assert_eq!(train.add_wagon(same_serial), Err(TrainError::WagonInUse));

    let retuned = Locomotive::new(taurus("T1").vehicle().clone(), kg(1.0), DriveType::Diesel);
    assert!(registry.create_train(oebb(), retuned).is_err());
}

#[test]
fn custom_passenger_weight_and_guard_ratio() {
    let config = RegistryConfig::new(kg(100.0), 40, VehicleIdentity::Structural).unwrap();
    let registry = Registry::with_config(config);
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    train.add_wagon(passenger_car("1")).unwrap();

    // 124 seats
    assert_eq!(train.max_additional_load(), kg(124.0 * 100.0 + 12_000.0));
    assert_eq!(train.required_guards(), 4);
}

#[test]
fn concurrent_creation_admits_locomotive_once() {
    let registry = Registry::new();

    let successes = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                scope.spawn(move || registry.create_train(oebb(), taurus("Contested")).is_ok())
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().is_ok_and(|ok| ok))
            .filter(|ok| *ok)
            .count()
    });

    assert_eq!(successes, 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn concurrent_wagon_adds_admit_wagon_once() {
    let registry = Registry::new();
    let trains: Vec<Train> = (0..4)
        .map(|i| registry.create_train(oebb(), taurus(&format!("T{i}"))).unwrap())
        .collect();

    std::thread::scope(|scope| {
        for train in &trains {
            scope.spawn(move || {
                let _ = train.add_wagon(passenger_car("Shared"));
            });
        }
    });

    let holders = trains.iter().filter(|t| !t.wagons().is_empty()).count();
    assert_eq!(holders, 1);
}

#[test]
fn remove_wagon_respects_kind() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    let car = passenger_car("6");
    train.add_wagon(car.clone()).unwrap();

    assert!(!train.remove_wagon(&Wagon::dining_car(car.vehicle().clone())));
    assert_eq!(train.wagons(), vec![car.clone()]);
    assert!(train.remove_wagon(&car));
    assert!(!registry.is_wagon_in_use(&car));
}

#[test]
fn huge_wagons_keep_figures_finite() {
    let registry = Registry::new();
    let train = registry.create_train(oebb(), taurus("T1")).unwrap();
    for serial in ["Heavy1", "Heavy2"] {
        let heavy = RailVehicle::builder(
            siemens(),
            YearOfManufacturing::new(2010),
            SerialNumber::new(serial),
        )
        .empty_weight(kg(1e308))
        .max_passengers(i64::MAX)
        .build()
        .unwrap();
        train.add_wagon(Wagon::freight_wagon(heavy)).unwrap();
    }

    assert_eq!(train.max_passengers(), u64::MAX);
    assert_eq!(train.empty_weight().value(), f64::MAX);
    assert!(!train.is_drivable());

    let json = serde_json::to_value(train.report()).unwrap();
    assert!(json.as_object().unwrap().values().all(|v| !v.is_null()));
}
