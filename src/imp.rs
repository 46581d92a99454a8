// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Backend adapters.
//at the moment we only support wgpu

#[cfg(feature = "backend_wgpu")]
mod wgpu;
