//! Hueswap desktop and web application using egui/eframe.
//!
//! The native build opens a window; the wasm build renders into `the_canvas_id`.

use hueswap_app::HueswapApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.hueswap";

    better_panic::install();
    env_logger::init();

    let mut viewport = eframe::egui::ViewportBuilder::default()
        .with_app_id(APP_ID)
        .with_resizable(true)
        .with_inner_size((640.0, 720.0))
        .with_min_inner_size((320.0, 360.0));
    match hueswap_app::icon::app_icon() {
        Ok(icon) => viewport = viewport.with_icon(icon),
        Err(e) => log::warn!("failed to render the window icon: {e}"),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Hueswap",
        options,
        Box::new(|cc| Ok(Box::new(HueswapApp::new(cc)?))),
    )
}

#[cfg(target_arch = "wasm32")]
async fn start_web(document: &web_sys::Document) -> Result<(), String> {
    use eframe::wasm_bindgen::JsCast as _;

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("missing element the_canvas_id")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id is not a canvas")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(HueswapApp::new(cc)?))),
        )
        .await
        .map_err(|e| format!("{e:?}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    eframe::WebLogger::init(level).ok();

    log::info!("Hueswap {} (wasm)", env!("CARGO_PKG_VERSION"));

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::error!("no document to render into");
            return;
        };

        let result = start_web(&document).await;
        let loading_text = document.get_element_by_id("loading_text");
        match (result, loading_text) {
            (Ok(()), Some(loading_text)) => loading_text.remove(),
            (Ok(()), None) => {}
            (Err(e), loading_text) => {
                log::error!("failed to start Hueswap: {e}");
                if let Some(loading_text) = loading_text {
                    loading_text.set_inner_html(
                        "<p>Hueswap failed to start. See the developer console for details.</p>",
                    );
                }
            }
        }
    });
}
