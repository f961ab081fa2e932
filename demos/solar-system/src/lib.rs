use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod app;
mod bodies;
use app::SolarSystemApp;

orrery_web::export_app!(SolarSystemApp, "solar-system");
