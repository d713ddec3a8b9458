use bevy::prelude::*;

pub const CARTRIDGE_BODY_SIZE: Vec3 = Vec3::new(0.8, 1.2, 0.15);
pub const CARTRIDGE_METALLIC: f32 = 0.3;
pub const CARTRIDGE_ROUGHNESS: f32 = 0.4;

pub const NOTCH_SIZE: Vec3 = Vec3::new(0.5, 0.2, 0.05);
pub const NOTCH_OFFSET: Vec3 = Vec3::new(0.0, -0.5, 0.08);
pub const NOTCH_COLOUR: Color = Color::srgb(0.102, 0.102, 0.102);

pub const LABEL_SIZE: Vec3 = Vec3::new(0.65, 0.7, 0.02);
pub const LABEL_OFFSET: Vec3 = Vec3::new(0.0, 0.15, 0.08);
pub const LABEL_COLOUR: Color = Color::srgb(0.961, 0.961, 0.961);

pub const RING_MAJOR_RADIUS: f32 = 0.7;
pub const RING_MINOR_RADIUS: f32 = 0.03;
pub const RING_HIGH_COLOUR: Color = Color::srgb(0.0, 1.0, 0.533);
pub const RING_MODERATE_COLOUR: Color = Color::srgb(1.0, 1.0, 0.0);
pub const RING_EMISSIVE_INTENSITY: f32 = 0.8;
pub const RING_OPACITY: f32 = 0.8;

pub const PLATFORM_Y: f32 = -3.0;
pub const PLATFORM_TOP_RADIUS: f32 = 8.0;
pub const PLATFORM_BOTTOM_RADIUS: f32 = 10.0;
pub const PLATFORM_HEIGHT: f32 = 0.5;
pub const PLATFORM_COLOUR: Color = Color::srgb(0.039, 0.039, 0.039);
pub const PLATFORM_EMISSIVE: Color = Color::srgb(0.102, 0.102, 0.18);

pub const FLOOR_RING_Y: f32 = -2.5;
pub const FLOOR_RING_MAJOR_RADIUS: f32 = 7.0;
pub const FLOOR_RING_MINOR_RADIUS: f32 = 0.05;
pub const CYAN: Color = Color::srgb(0.0, 1.0, 1.0);
pub const MAGENTA: Color = Color::srgb(1.0, 0.0, 1.0);

pub const PILLAR_Y: f32 = -1.0;
pub const PILLAR_RADIUS: f32 = 0.1;
pub const PILLAR_HEIGHT: f32 = 4.0;

pub const AMBIENT_BRIGHTNESS: f32 = 300.0;
pub const DIRECTIONAL_ILLUMINANCE: f32 = 4_000.0;
pub const POINT_LIGHT_INTENSITY: f32 = 400_000.0;

pub const BACKGROUND_COLOUR: Color = Color::BLACK;
