pub mod runner;

pub use runner::AppRunner;

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// This macro eliminates ~200 lines of boilerplate per app by generating:
/// - `thread_local!` storage for the AppRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (app_init, app_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
/// use orrery_web::AppRunner;
///
/// mod app;
/// use app::MyApp;
///
/// orrery_web::export_app!(MyApp, "my-app");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements `orrery_engine::App`
/// - `$app_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::AppRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::AppRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("App not initialized. Call app_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn app_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::AppRunner::new(app);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $app_name);
        }

        #[wasm_bindgen]
        pub fn app_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms / 1000.0));
        }

        #[wasm_bindgen]
        pub fn app_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_scroll(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Scroll { delta }));
        }

        #[wasm_bindgen]
        pub fn app_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn app_resize(width: f32, height: f32) {
            let ratio = web_sys::window()
                .map(|w| w.device_pixel_ratio() as f32)
                .unwrap_or(1.0);
            with_runner(|r| r.resize(width, height, ratio));
        }

        #[wasm_bindgen]
        pub fn app_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_spheres_ptr() -> *const f32 {
            with_runner(|r| r.spheres_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_count() -> u32 {
            with_runner(|r| r.sphere_count())
        }

        #[wasm_bindgen]
        pub fn get_rings_ptr() -> *const f32 {
            with_runner(|r| r.rings_ptr())
        }

        #[wasm_bindgen]
        pub fn get_ring_count() -> u32 {
            with_runner(|r| r.ring_count())
        }

        #[wasm_bindgen]
        pub fn get_path_vertices_ptr() -> *const f32 {
            with_runner(|r| r.path_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_path_vertex_count() -> u32 {
            with_runner(|r| r.path_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sky_ptr() -> *const f32 {
            with_runner(|r| r.sky_ptr())
        }

        // ---- Lighting accessors ----

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_intensity() -> f32 {
            with_runner(|r| r.ambient_intensity())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient_r())
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient_g())
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient_b())
        }

        // ---- Startup JSON accessors ----

        #[wasm_bindgen]
        pub fn get_panel_schema() -> String {
            with_runner(|r| r.panel_schema_json())
        }

        #[wasm_bindgen]
        pub fn get_texture_manifest() -> String {
            with_runner(|r| r.texture_manifest_json())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_spheres() -> u32 {
            with_runner(|r| r.max_spheres())
        }

        #[wasm_bindgen]
        pub fn get_max_rings() -> u32 {
            with_runner(|r| r.max_rings())
        }

        #[wasm_bindgen]
        pub fn get_max_path_vertices() -> u32 {
            with_runner(|r| r.max_path_vertices())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
