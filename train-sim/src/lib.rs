//! Rail vehicle and train composition model.
//!
//! Models locomotives and wagons, assembles them into trains and derives
//! the figures that matter for running a train: weight, length, passenger
//! capacity, tractive force and the number of guards required.
//!
//! Every train is created by a [`registry::Registry`], which guarantees
//! that no vehicle is part of more than one train.

pub mod domain;
pub mod fleet;
pub mod registry;
pub mod report;
