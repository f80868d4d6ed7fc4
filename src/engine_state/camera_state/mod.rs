//! # Camera State Management
//!
//! This module handles all camera-related functionality including:
//! - Camera position and orientation tracking
//! - View and projection matrix calculations
//!
//! ## Core Components
//! - `Camera`: Represents the camera's position and orientation in 3D space
//! - `Projection`: Manages the camera's projection matrix
//! - `ViewProjection`: The only thing renderers need from a camera
//! - `CameraState`: A camera and its projection, built from `CameraConfig`

use cgmath::{Deg, Matrix4, Point3};
use serde::{Deserialize, Serialize};

pub mod camera;

pub use camera::{Camera, Projection};

/// Supplies the matrices a renderer draws with.
pub trait ViewProjection {
    /// World space to view space.
    fn view_matrix(&self) -> Matrix4<f32>;

    /// View space to clip space.
    fn projection_matrix(&self) -> Matrix4<f32>;

    /// Projection applied after view.
    fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Camera settings as they appear in the configuration file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Point the camera initially faces; `None` keeps yaw and pitch at zero.
    pub look_at: Option<[f32; 3]>,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            position: [50.0, 50.0, 50.0],
            look_at: None,
            fovy_degrees: 60.0,
            znear: 0.1,
            zfar: 100_000.0,
            width: 600,
            height: 600,
        }
    }
}

/// A camera together with its projection.
#[derive(Debug, Clone)]
pub struct CameraState {
    /// The current camera position and orientation
    pub camera: Camera,
    /// Perspective projection settings
    pub projection: Projection,
}

impl CameraState {
    /// Creates a camera state from its configuration.
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Camera::new(Point3::from(config.position), Deg(0.0), Deg(0.0));
        if let Some(target) = config.look_at {
            camera.look_at(Point3::from(target));
        }

        let projection = Projection::new(
            config.width,
            config.height,
            Deg(config.fovy_degrees),
            config.znear,
            config.zfar,
        );

        CameraState { camera, projection }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        CameraState::new(&CameraConfig::default())
    }
}

impl ViewProjection for CameraState {
    fn view_matrix(&self) -> Matrix4<f32> {
        self.camera.calc_matrix()
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection.calc_matrix()
    }
}
