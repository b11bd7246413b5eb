//! sea-orm entities for medspas, their service catalog and appointments.

pub mod db;
pub mod money;
pub mod medspa;
pub mod services;
pub mod appointments;
pub mod appointments_services;

#[cfg(test)]
mod tests;
