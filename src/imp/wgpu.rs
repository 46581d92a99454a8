// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
wgpu adapter.

Maps catalog formats to `wgpu::TextureFormat` and ranges to the descriptors
`Queue::write_texture` and `CommandEncoder::copy_buffer_to_texture` take.
*/

mod pixel_format;
mod texture;
