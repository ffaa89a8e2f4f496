//! Transport surfaces for the calculator module.

pub mod rest;
