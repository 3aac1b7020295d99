pub mod controller;
pub mod mvi;
pub mod screens;
