//! WASM bindings for Brick Stencil.
//!
//! This module provides JavaScript-friendly bindings that hand the assembled
//! CSR arrays to a solver running in the browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmStencil } from 'brick_stencil';
//!
//! await init();
//!
//! const a = new WasmStencil(8);
//! const rowPtr = a.row_ptr();       // Uint32Array, length 65
//! const cols = a.col_indices();     // Uint32Array
//! const vals = a.values();          // Float64Array
//! ```

use wasm_bindgen::prelude::*;

use crate::assembly::Assembler;
use crate::error::StencilError;
use crate::sparse::CsrMatrix;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: StencilError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible handle to an assembled stencil operator.
#[wasm_bindgen]
pub struct WasmStencil {
    matrix: CsrMatrix,
}

#[wasm_bindgen]
impl WasmStencil {
    /// Assemble the operator for an N x N grid.
    ///
    /// # Returns
    /// The assembled operator, or an error string for an invalid dimension
    /// or an out-of-range coupling.
    #[wasm_bindgen(constructor)]
    pub fn new(n: usize) -> Result<WasmStencil, JsValue> {
        let matrix = Assembler::new(n).map_err(to_js)?.assemble().map_err(to_js)?;
        Ok(WasmStencil { matrix })
    }

    /// Number of rows (and columns).
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of stored entries.
    #[wasm_bindgen(getter)]
    pub fn nnz(&self) -> usize {
        self.matrix.nnz()
    }

    /// CSR row pointer array.
    #[wasm_bindgen]
    pub fn row_ptr(&self) -> Vec<u32> {
        self.matrix.row_ptr().iter().map(|&p| p as u32).collect()
    }

    /// CSR column index array.
    #[wasm_bindgen]
    pub fn col_indices(&self) -> Vec<u32> {
        self.matrix.col_indices().iter().map(|&c| c as u32).collect()
    }

    /// CSR value array.
    #[wasm_bindgen]
    pub fn values(&self) -> Vec<f64> {
        self.matrix.values().to_vec()
    }

    /// Compute A * x.
    #[wasm_bindgen]
    pub fn matvec(&self, x: &[f64]) -> Result<Vec<f64>, JsValue> {
        self.matrix.matvec(x).map_err(to_js)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
