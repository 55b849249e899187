//! UI module - egui painting for the activities board

pub mod components;
