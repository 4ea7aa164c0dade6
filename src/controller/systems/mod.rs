//! Controller domain: system modules driving the locomotion core.

mod input;
mod presentation;
mod sensors;
mod step;

pub(crate) use input::read_input;
pub(crate) use presentation::apply_presentation;
pub(crate) use sensors::sense_contacts;
pub(crate) use step::step_locomotion;
