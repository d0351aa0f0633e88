//! facet-wasm - WebAssembly entry points for browser presentation layers.
//!
//! The UI owns one [`JsCube`] session, calls `rotate` once per user action
//! and re-renders from `state`. Reset discards the session state for the
//! canonical solved labelling; the engine itself never holds state.

use facet_core::Cube;
use facet_engine::apply_labeled;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct JsCube {
    inner: Cube,
}

impl Default for JsCube {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsCube {
    /// A session starting from the canonical solved state.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Cube::solved(),
        }
    }

    /// Turn one face. Throws on an unknown face or direction label and
    /// leaves the session unchanged.
    pub fn rotate(&mut self, face: &str, direction: &str) -> Result<(), JsValue> {
        self.inner = apply_labeled(&self.inner, face, direction).map_err(to_js_error)?;
        Ok(())
    }

    /// Discard the current state for the canonical solved state.
    pub fn reset(&mut self) {
        self.inner = Cube::solved();
    }

    /// The full state as a face-keyed map of nine labels each.
    pub fn state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner).unwrap_or(JsValue::NULL)
    }

    /// The nine labels of one face, row-major.
    pub fn face(&self, face: &str) -> Result<Vec<String>, JsValue> {
        let face = facet_core::Face::from_label(face)
            .ok_or_else(|| JsValue::from_str(&format!("invalid face: {face}")))?;
        Ok(self.inner.face(face).iter().map(|s| s.to_string()).collect())
    }

    #[wasm_bindgen(js_name = isSolved)]
    pub fn is_solved(&self) -> bool {
        self.inner.is_solved()
    }
}

/// Stateless form of the rotation contract: take a serialized state, return
/// the rotated state, never mutate the input value.
#[wasm_bindgen(js_name = rotateCube)]
pub fn rotate_cube(state: JsValue, face: &str, direction: &str) -> Result<JsValue, JsValue> {
    let cube: Cube = serde_wasm_bindgen::from_value(state).map_err(to_js_error)?;
    let next = apply_labeled(&cube, face, direction).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&next).map_err(to_js_error)
}

/// The canonical solved state as a face-keyed map.
#[wasm_bindgen(js_name = initialCubeState)]
pub fn initial_cube_state() -> JsValue {
    serde_wasm_bindgen::to_value(&Cube::solved()).unwrap_or(JsValue::NULL)
}
