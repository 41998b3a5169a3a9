#![allow(dead_code)]

pub mod factories;
pub mod helpers;
pub mod stub_server;
