mod custom_rasterizer;
mod determinism;
mod metal_volume_errors;
mod metal_volume_shape;
