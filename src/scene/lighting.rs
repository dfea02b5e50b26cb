//! Fixed bedroom lighting and the flat shading model that consumes it.

use glam::Vec3;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Ambient,
    /// Shines from `position` towards the origin.
    Directional { position: Vec3 },
    /// `distance == 0.0` means no cutoff.
    Point { position: Vec3, distance: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub name: &'static str,
    pub kind: LightKind,
    pub color: u32,
    pub intensity: f32,
}

#[derive(Debug, Clone)]
pub struct LightingRig {
    lights: Vec<Light>,
}

/// Surface inputs for [`LightingRig::shade`], colors in linear RGB.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceSample {
    pub position: Vec3,
    pub normal: Vec3,
    pub albedo: Vec3,
    pub emissive: Vec3,
    pub roughness: f32,
    pub metalness: f32,
}

impl LightingRig {
    pub fn bedroom() -> Self {
        log::info!("Adding lighting to bedroom scene...");
        let lights = vec![
            Light {
                name: "ambient",
                kind: LightKind::Ambient,
                color: 0xffffff,
                intensity: 0.8,
            },
            Light {
                name: "moon",
                kind: LightKind::Directional {
                    position: Vec3::new(10.0, 15.0, 5.0),
                },
                color: 0xffffff,
                intensity: 1.2,
            },
            Light {
                name: "lamp",
                kind: LightKind::Point {
                    position: Vec3::new(3.5, 2.8, -1.5),
                    distance: 10.0,
                },
                color: 0xffd700,
                intensity: 0.6,
            },
            Light {
                name: "fill",
                kind: LightKind::Directional {
                    position: Vec3::new(-8.0, 8.0, -3.0),
                },
                color: 0xffffff,
                intensity: 0.6,
            },
            Light {
                name: "rim",
                kind: LightKind::Point {
                    position: Vec3::new(-5.0, 5.0, 8.0),
                    distance: 0.0,
                },
                color: 0x87ceeb,
                intensity: 0.8,
            },
        ];
        log::info!("Bedroom lighting added ({} lights)", lights.len());
        Self { lights }
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Outgoing linear radiance for a surface point seen from `eye`.
    pub fn shade(&self, surface: &SurfaceSample, eye: Vec3) -> Vec3 {
        let normal = surface.normal.normalize_or_zero();
        let view = (eye - surface.position).normalize_or_zero();
        let diffuse = surface.albedo * (1.0 - surface.metalness) / PI;
        let specular = Vec3::splat(0.04).lerp(surface.albedo, surface.metalness);
        let shininess = (1.0 - surface.roughness).clamp(0.0, 1.0) * 96.0 + 2.0;

        let mut out = surface.emissive;
        for light in self.lights() {
            let radiance = srgb_hex_to_linear(light.color) * light.intensity;
            let (to_light, attenuation) = match light.kind {
                LightKind::Ambient => {
                    out += radiance * diffuse;
                    continue;
                }
                LightKind::Directional { position } => (position.normalize_or_zero(), 1.0),
                LightKind::Point { position, distance } => {
                    let offset = position - surface.position;
                    let d = offset.length().max(1e-4);
                    (offset / d, point_attenuation(d, distance))
                }
            };
            let n_dot_l = normal.dot(to_light).max(0.0);
            if n_dot_l <= 0.0 || attenuation <= 0.0 {
                continue;
            }
            let half = (to_light + view).normalize_or_zero();
            let n_dot_h = normal.dot(half).max(0.0);
            let blinn = (shininess + 2.0) / (8.0 * PI) * n_dot_h.powf(shininess);
            out += radiance * attenuation * n_dot_l * (diffuse + specular * blinn);
        }
        out
    }
}

/// Inverse-square decay with a smooth window reaching zero at `cutoff`.
fn point_attenuation(distance: f32, cutoff: f32) -> f32 {
    let falloff = 1.0 / (distance * distance).max(0.01);
    if cutoff > 0.0 {
        let ratio = (distance / cutoff).powi(4);
        falloff * (1.0 - ratio).clamp(0.0, 1.0).powi(2)
    } else {
        falloff
    }
}

pub fn srgb_hex_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(channel(16), channel(8), channel(0))
}
