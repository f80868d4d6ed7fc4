//! First-person camera and perspective projection.
//!
//! `Camera` yields the view matrix, `Projection` the clip matrix. Neither knows
//! about the renderer; `CameraState` pairs them behind `ViewProjection`.

use std::f32::consts::FRAC_PI_2;

use cgmath::{perspective, InnerSpace, Matrix4, Point3, Rad, Vector3};

/// Pitch stops this far short of straight up or down.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.0001;

/// A free-look camera.
///
/// Yaw 0 looks along +X; positive yaw turns toward +Z. Pitch is kept just
/// inside `(-90°, 90°)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    /// Rotation about +Y
    pub yaw: Rad<f32>,
    /// Elevation above the XZ plane
    pub pitch: Rad<f32>,
}

impl Camera {
    /// Places a camera at `position` facing `yaw` and `pitch`.
    ///
    /// Pitch outside the limit is clamped.
    pub fn new(
        position: impl Into<Point3<f32>>,
        yaw: impl Into<Rad<f32>>,
        pitch: impl Into<Rad<f32>>,
    ) -> Self {
        Camera {
            position: position.into(),
            yaw: yaw.into(),
            pitch: clamp_pitch(pitch.into()),
        }
    }

    /// Unit vector the camera looks along.
    pub fn get_view_vec(&self) -> Vector3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize()
    }

    /// Turns the camera to face `target`.
    ///
    /// Does nothing if `target` is the camera position.
    pub fn look_at(&mut self, target: Point3<f32>) {
        let direction = target - self.position;
        if direction.magnitude2() == 0.0 {
            return;
        }
        let direction = direction.normalize();
        self.yaw = Rad(direction.z.atan2(direction.x));
        self.pitch = clamp_pitch(Rad(direction.y.clamp(-1.0, 1.0).asin()));
    }

    /// World to view space.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.get_view_vec(), Vector3::unit_y())
    }
}

fn clamp_pitch(pitch: Rad<f32>) -> Rad<f32> {
    Rad(pitch.0.clamp(-PITCH_LIMIT, PITCH_LIMIT))
}

/// Perspective projection for a viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// width / height, never zero or infinite
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    /// Projection for a `width` × `height` viewport with vertical field of view `fovy`.
    ///
    /// Zero dimensions count as one pixel.
    pub fn new(width: u32, height: u32, fovy: impl Into<Rad<f32>>, znear: f32, zfar: f32) -> Self {
        Projection {
            aspect: aspect_of(width, height),
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// View to clip space.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

fn aspect_of(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
