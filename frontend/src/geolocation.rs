use gloo_utils::window;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{GeolocationPosition, GeolocationPositionError};
use yew::Callback;

/// One-shot device position request. Exactly one of the two callbacks fires,
/// at most once; an unsupported or failing geolocation API reports through
/// `on_error`.
pub fn request_position(on_found: Callback<(f64, f64)>, on_error: Callback<()>) {
    let Ok(geolocation) = window().navigator().geolocation() else {
        on_error.emit(());
        return;
    };

    let success = Closure::once_into_js(move |position: GeolocationPosition| {
        let coords = position.coords();
        on_found.emit((coords.latitude(), coords.longitude()));
    });

    let error = on_error.clone();
    let failure = Closure::once_into_js(move |_err: GeolocationPositionError| {
        error.emit(());
    });

    if geolocation
        .get_current_position_with_error_callback(
            success.unchecked_ref(),
            Some(failure.unchecked_ref()),
        )
        .is_err()
    {
        on_error.emit(());
    }
}
