//! 3D mesh blob scene
//!
//! A displaced UV sphere shaded with Lambert lighting and drawn back to
//! front. Geometry is generated once per frame and shared by every blob in
//! the scene; each blob only adds its own translation, scale and color.

use std::f32::consts::{PI, TAU};
use std::ops::{Add, Mul, Neg, Sub};

use super::palette::{self, Rgba};

/// Default sphere tessellation
pub const DEFAULT_RINGS: usize = 24;
pub const DEFAULT_SEGMENTS: usize = 32;

/// Surface displacement amplitude at intensity 1
const DISPLACEMENT: f32 = 0.3;

pub const FOV_DEGREES: f32 = 45.0;
pub const MIN_DISTANCE: f32 = 3.0;
pub const MAX_DISTANCE: f32 = 10.0;
pub const DEFAULT_DISTANCE: f32 = 5.0;
pub const AUTO_ROTATE_SPEED: f32 = 0.5;

/// Radians of orbit per dragged pixel
const DRAG_SENSITIVITY: f32 = 0.01;
/// Keep the camera off the poles so the up vector stays valid
const MAX_ELEVATION: f32 = PI / 2.0 - 0.01;
const NEAR_PLANE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector, or zero for a degenerate input
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len <= f32::EPSILON {
            Vec3::ZERO
        } else {
            self * (1.0 / len)
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// One blob placed in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBlob {
    pub position: Vec3,
    pub scale: f32,
    pub color: String,
}

impl MeshBlob {
    pub fn new(position: Vec3, scale: f32, color: impl Into<String>) -> Self {
        Self {
            position,
            scale,
            color: color.into(),
        }
    }

    /// The four blobs of the demo scene, largest first
    pub fn scene() -> Vec<MeshBlob> {
        vec![
            MeshBlob::new(Vec3::new(0.0, 0.0, 0.0), 1.5, "#6366f1"),
            MeshBlob::new(Vec3::new(-3.0, 1.0, -2.0), 0.8, "#ec4899"),
            MeshBlob::new(Vec3::new(3.0, -1.0, -1.0), 0.6, "#10b981"),
            MeshBlob::new(Vec3::new(0.0, 2.5, -3.0), 0.4, "#f59e0b"),
        ]
    }

    fn to_world(&self, local: Vec3) -> Vec3 {
        self.position + local * self.scale
    }
}

/// Unit-scale blob surface for one instant
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGeometry {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Counter-clockwise when seen from outside
    pub faces: Vec<[usize; 3]>,
}

impl MeshGeometry {
    /// Displaced UV sphere with `rings` latitude bands and `segments` longitude bands
    pub fn generate(rings: usize, segments: usize, time: f32, intensity: f32) -> Self {
        let rings = rings.max(2);
        let segments = segments.max(3);
        let stride = segments + 1;

        let mut vertices = Vec::with_capacity((rings + 1) * stride);
        for ring in 0..=rings {
            let phi = PI * ring as f32 / rings as f32;
            for segment in 0..=segments {
                let theta = TAU * segment as f32 / segments as f32;
                let unit = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
                vertices.push(unit * displacement(unit, time, intensity));
            }
        }

        let mut faces = Vec::with_capacity(rings * segments * 2);
        for ring in 0..rings {
            for segment in 0..segments {
                let a = ring * stride + segment;
                let b = a + stride;
                faces.push([a, a + 1, b]);
                faces.push([b, a + 1, b + 1]);
            }
        }

        let mut normals = vec![Vec3::ZERO; vertices.len()];
        for face in &faces {
            let normal = face_normal(&vertices, face);
            for &index in face {
                normals[index] = normals[index] + normal;
            }
        }
        // Seam vertices at the poles only touch collapsed faces
        for (normal, vertex) in normals.iter_mut().zip(&vertices) {
            let unit = normal.normalize();
            *normal = if unit == Vec3::ZERO {
                vertex.normalize()
            } else {
                unit
            };
        }

        Self {
            vertices,
            normals,
            faces,
        }
    }
}

/// Radial scale applied to a unit-sphere direction
pub fn displacement(unit: Vec3, time: f32, intensity: f32) -> f32 {
    let wobble = (unit.x * 3.0 + time).sin()
        * (unit.y * 3.0 + time * 1.3).sin()
        * (unit.z * 3.0 + time * 0.7).sin();
    1.0 + DISPLACEMENT * intensity * wobble
}

/// Unnormalized face normal; zero for collapsed triangles at the poles
fn face_normal(vertices: &[Vec3], face: &[usize; 3]) -> Vec3 {
    let [a, b, c] = face.map(|i| vertices[i]);
    (b - a).cross(c - a)
}

/// Camera orbiting the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
    pub auto_rotate: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            distance: DEFAULT_DISTANCE,
            auto_rotate: true,
        }
    }
}

impl OrbitCamera {
    pub fn position(&self) -> Vec3 {
        let flat = self.distance * self.elevation.cos();
        Vec3::new(
            flat * self.azimuth.sin(),
            self.distance * self.elevation.sin(),
            flat * self.azimuth.cos(),
        )
    }

    /// Orbit by a mouse drag measured in pixels
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * DRAG_SENSITIVITY;
        self.elevation = (self.elevation + dy * DRAG_SENSITIVITY).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Move closer for positive `delta`, clamped to the allowed distance range
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta * 0.5).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// One frame of auto-rotation; a full turn takes 60 / speed seconds at 60 fps
    pub fn advance(&mut self) {
        if self.auto_rotate {
            self.azimuth += TAU / 3600.0 * AUTO_ROTATE_SPEED;
        }
    }

    /// Camera-space coordinates with depth along the view direction
    pub fn to_view(&self, point: Vec3) -> Vec3 {
        let eye = self.position();
        let forward = (-eye).normalize();
        let right = forward.cross(Vec3::new(0.0, 1.0, 0.0)).normalize();
        let up = right.cross(forward);
        let relative = point - eye;
        Vec3::new(relative.dot(right), relative.dot(up), relative.dot(forward))
    }

    /// Perspective projection into a `width × height` viewport
    pub fn project(&self, point: Vec3, width: f32, height: f32) -> Option<(f32, f32, f32)> {
        let view = self.to_view(point);
        if view.z <= NEAR_PLANE {
            return None;
        }
        let focal = 1.0 / (FOV_DEGREES.to_radians() / 2.0).tan();
        let half = height / 2.0;
        let x = width / 2.0 + view.x * focal / view.z * half;
        let y = height / 2.0 - view.y * focal / view.z * half;
        Some((x, y, view.z))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Light arriving from `vector` towards the origin
    Directional,
    /// Light emitted from the point `vector`
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub vector: Vec3,
    pub color: Rgba,
    pub intensity: f32,
}

/// Ambient term plus a set of lights
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub lights: Vec<Light>,
}

impl Default for Lighting {
    fn default() -> Self {
        let white = Rgba::new(1.0, 1.0, 1.0, 1.0);
        Self {
            ambient: 0.4,
            lights: vec![
                Light {
                    kind: LightKind::Directional,
                    vector: Vec3::new(10.0, 10.0, 5.0),
                    color: white,
                    intensity: 1.0,
                },
                Light {
                    kind: LightKind::Point,
                    vector: Vec3::new(-10.0, -10.0, -10.0),
                    color: palette::parse_hex("#ff6b6b").unwrap_or(white),
                    intensity: 0.5,
                },
                Light {
                    kind: LightKind::Point,
                    vector: Vec3::new(10.0, -10.0, 10.0),
                    color: palette::parse_hex("#4ecdc4").unwrap_or(white),
                    intensity: 0.5,
                },
            ],
        }
    }
}

impl Lighting {
    /// Lambert shading of `base` at `position` with unit `normal`
    pub fn shade(&self, base: Rgba, position: Vec3, normal: Vec3) -> Rgba {
        let (mut r, mut g, mut b) = (self.ambient, self.ambient, self.ambient);
        for light in &self.lights {
            let to_light = match light.kind {
                LightKind::Directional => light.vector.normalize(),
                LightKind::Point => (light.vector - position).normalize(),
            };
            let lambert = normal.dot(to_light).max(0.0) * light.intensity;
            r += light.color.r * lambert;
            g += light.color.g * lambert;
            b += light.color.b * lambert;
        }
        Rgba::new(
            (base.r * r).min(1.0),
            (base.g * g).min(1.0),
            (base.b * b).min(1.0),
            base.a,
        )
    }
}

/// A screen-space triangle ready to fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedFace {
    pub points: [(f32, f32); 3],
    pub depth: f32,
    pub color: Rgba,
}

/// Average of the face's vertex normals; blobs only translate and scale
/// uniformly, so local normals are world normals. Falls back to `flat`.
fn shading_normal(geometry: &MeshGeometry, face: &[usize; 3], flat: Vec3) -> Vec3 {
    let [a, b, c] = face.map(|i| geometry.normals[i]);
    let smooth = (a + b + c).normalize();
    if smooth == Vec3::ZERO { flat } else { smooth }
}

/// Visible faces of every blob, sorted far to near
pub fn project_scene(
    blobs: &[MeshBlob],
    geometry: &MeshGeometry,
    camera: &OrbitCamera,
    lighting: &Lighting,
    width: f32,
    height: f32,
) -> Vec<ProjectedFace> {
    let eye = camera.position();
    let mut projected = Vec::new();

    for blob in blobs {
        let Some(base) = palette::parse_hex(&blob.color) else {
            continue;
        };
        let world: Vec<Vec3> = geometry.vertices.iter().map(|v| blob.to_world(*v)).collect();

        for face in &geometry.faces {
            let normal = face_normal(&world, face).normalize();
            if normal == Vec3::ZERO {
                continue;
            }
            let [a, b, c] = face.map(|i| world[i]);
            let centroid = (a + b + c) * (1.0 / 3.0);
            if normal.dot(eye - centroid) <= 0.0 {
                continue;
            }

            let (Some(pa), Some(pb), Some(pc)) = (
                camera.project(a, width, height),
                camera.project(b, width, height),
                camera.project(c, width, height),
            ) else {
                continue;
            };

            projected.push(ProjectedFace {
                points: [(pa.0, pa.1), (pb.0, pb.1), (pc.0, pc.1)],
                depth: (pa.2 + pb.2 + pc.2) / 3.0,
                color: lighting.shade(base, centroid, shading_normal(geometry, face, normal)),
            });
        }
    }

    projected.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    projected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    mod geometry {
        use super::*;

        #[test]
        fn zero_intensity_is_unit_sphere() {
            let mesh = MeshGeometry::generate(8, 12, 3.0, 0.0);
            for v in &mesh.vertices {
                assert!(approx(v.length(), 1.0), "vertex {:?} off the sphere", v);
            }
            assert_eq!(mesh.vertices.len(), 9 * 13);
            assert_eq!(mesh.faces.len(), 8 * 12 * 2);
        }

        #[test]
        fn faces_point_outward() {
            let mesh = MeshGeometry::generate(DEFAULT_RINGS, DEFAULT_SEGMENTS, 0.0, 0.0);
            for face in &mesh.faces {
                let normal = face_normal(&mesh.vertices, face);
                if normal.length() < 1e-6 {
                    continue;
                }
                let [a, b, c] = face.map(|i| mesh.vertices[i]);
                let centroid = (a + b + c) * (1.0 / 3.0);
                assert!(normal.dot(centroid) > 0.0, "face {:?} points inward", face);
            }
        }

        #[test]
        fn displacement_stays_within_amplitude() {
            let mesh = MeshGeometry::generate(12, 16, 1.7, 1.0);
            for v in &mesh.vertices {
                let r = v.length();
                assert!((0.7 - 1e-4..=1.3 + 1e-4).contains(&r), "radius {}", r);
            }
        }

        #[test]
        fn normals_are_unit_length() {
            let mesh = MeshGeometry::generate(6, 8, 0.5, 1.0);
            for n in &mesh.normals {
                assert!(approx(n.length(), 1.0));
            }
        }

        #[test]
        fn sphere_shading_normals_point_outward() {
            let mesh = MeshGeometry::generate(8, 12, 0.0, 0.0);
            for face in &mesh.faces {
                let [a, b, c] = face.map(|i| mesh.vertices[i]);
                let centroid = (a + b + c) * (1.0 / 3.0);
                let normal = shading_normal(&mesh, face, Vec3::ZERO);
                assert!(approx(normal.length(), 1.0));
                assert!(
                    normal.dot(centroid.normalize()) > 0.9,
                    "smooth normal should follow the sphere surface"
                );
            }
        }
    }

    mod camera {
        use super::*;

        #[test]
        fn default_camera_sits_on_positive_z() {
            let camera = OrbitCamera::default();
            let eye = camera.position();
            assert!(approx(eye.x, 0.0) && approx(eye.y, 0.0) && approx(eye.z, 5.0));
        }

        #[test]
        fn zoom_is_clamped() {
            let mut camera = OrbitCamera::default();
            camera.zoom(100.0);
            assert_eq!(camera.distance, MIN_DISTANCE);
            camera.zoom(-100.0);
            assert_eq!(camera.distance, MAX_DISTANCE);
        }

        #[test]
        fn origin_projects_to_center() {
            let camera = OrbitCamera::default();
            let (x, y, depth) = camera.project(Vec3::ZERO, 400.0, 300.0).expect("in front");
            assert!(approx(x, 200.0) && approx(y, 150.0));
            assert!(approx(depth, 5.0));
        }

        #[test]
        fn points_behind_camera_are_dropped() {
            let camera = OrbitCamera::default();
            assert!(camera.project(Vec3::new(0.0, 0.0, 6.0), 100.0, 100.0).is_none());
        }

        #[test]
        fn auto_rotate_can_be_disabled() {
            let mut camera = OrbitCamera::default();
            camera.advance();
            assert!(camera.azimuth > 0.0);
            camera.auto_rotate = false;
            let before = camera.azimuth;
            camera.advance();
            assert_eq!(camera.azimuth, before);
        }
    }

    #[test]
    fn facing_light_is_brighter() {
        let lighting = Lighting::default();
        let base = Rgba::new(0.5, 0.5, 0.5, 1.0);
        let lit = lighting.shade(base, Vec3::ZERO, Vec3::new(10.0, 10.0, 5.0).normalize());
        let dark = lighting.shade(base, Vec3::ZERO, Vec3::new(-10.0, 10.0, -5.0).normalize());
        assert!(lit.r > dark.r);
        assert!(dark.r >= base.r * lighting.ambient - 1e-6, "ambient is a floor");
    }

    #[test]
    fn scene_faces_sorted_back_to_front() {
        let geometry = MeshGeometry::generate(8, 12, 0.0, 0.5);
        let faces = project_scene(
            &MeshBlob::scene(),
            &geometry,
            &OrbitCamera::default(),
            &Lighting::default(),
            640.0,
            480.0,
        );
        assert!(!faces.is_empty());
        assert!(faces.windows(2).all(|w| w[0].depth >= w[1].depth));
    }
}
