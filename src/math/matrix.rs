use super::Vec3;

/// 4x4 matrix for transformations (column-major for WebGL)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.data[12] = x;
        m.data[13] = y;
        m.data[14] = z;
        m
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.data[0] = x;
        m.data[5] = y;
        m.data[10] = z;
        m
    }

    /// Perspective projection matrix
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);

        Self {
            data: [
                f / aspect, 0.0, 0.0, 0.0,
                0.0, f, 0.0, 0.0,
                0.0, 0.0, (far + near) * nf, -1.0,
                0.0, 0.0, 2.0 * far * near * nf, 0.0,
            ],
        }
    }

    /// Look-at view matrix
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let r = f.cross(&up).normalize();
        let u = r.cross(&f);

        Self {
            data: [
                r.x, u.x, -f.x, 0.0,
                r.y, u.y, -f.y, 0.0,
                r.z, u.z, -f.z, 0.0,
                -r.dot(&eye), -u.dot(&eye), f.dot(&eye), 1.0,
            ],
        }
    }

    /// Matrix multiplication (`self * other`)
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut result = [0.0f32; 16];

        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[row + k * 4] * other.data[k + col * 4];
                }
                result[row + col * 4] = sum;
            }
        }

        Self { data: result }
    }

    /// Post-multiply by a translation, so the offset is applied in this matrix's local frame
    pub fn translate(&self, offset: Vec3) -> Self {
        self.mul(&Self::translation(offset.x, offset.y, offset.z))
    }

    /// Post-multiply by a non-uniform scale
    pub fn scaled(&self, factors: Vec3) -> Self {
        self.mul(&Self::scale(factors.x, factors.y, factors.z))
    }

    /// Transform a point (applies translation)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.data[0] * p.x + self.data[4] * p.y + self.data[8] * p.z + self.data[12],
            self.data[1] * p.x + self.data[5] * p.y + self.data[9] * p.z + self.data[13],
            self.data[2] * p.x + self.data[6] * p.y + self.data[10] * p.z + self.data[14],
        )
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Mat4, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Get as slice for WebGL
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let m = Mat4::identity();
        assert_eq!(m.data[0], 1.0);
        assert_eq!(m.data[5], 1.0);
        assert_eq!(m.data[10], 1.0);
        assert_eq!(m.data[15], 1.0);
        assert_eq!(Mat4::default(), m);
    }

    #[test]
    fn test_translation() {
        let result = Mat4::translation(1.0, 2.0, 3.0).transform_point(Vec3::ZERO);
        assert!((result.x - 1.0).abs() < 0.0001);
        assert!((result.y - 2.0).abs() < 0.0001);
        assert!((result.z - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_matrix_mul() {
        let t = Mat4::translation(1.0, 0.0, 0.0);
        let s = Mat4::scale(2.0, 2.0, 2.0);
        let result = t.mul(&s).transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((result.x - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_translate_then_scale_applies_scale_first() {
        // local point (1,0,0) is scaled to 0.5 before the 1.5 offset
        let m = Mat4::identity()
            .translate(Vec3::new(1.5, 0.0, 0.0))
            .scaled(Vec3::new(0.5, 0.5, 0.5));
        let p = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((p.x - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(3.0, 4.0, 5.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);

        let at_eye = view.transform_point(eye);
        assert!(at_eye.length() < 0.0001);

        // target sits straight down -Z in camera space
        let at_target = view.transform_point(Vec3::ZERO);
        assert!(at_target.x.abs() < 0.0001);
        assert!(at_target.y.abs() < 0.0001);
        assert!((at_target.z + eye.length()).abs() < 0.0001);
    }

    #[test]
    fn test_perspective_shape() {
        let p = Mat4::perspective(std::f32::consts::FRAC_PI_2, 2.0, 0.1, 100.0);
        // tan(45deg) == 1 so focal length is 1
        assert!((p.data[5] - 1.0).abs() < 0.0001);
        assert!((p.data[0] - 0.5).abs() < 0.0001);
        assert_eq!(p.data[11], -1.0);
        assert_eq!(p.data[15], 0.0);
    }

    #[test]
    fn test_approx_eq() {
        let a = Mat4::translation(1.0, 2.0, 3.0);
        let mut b = a;
        b.data[12] += 1e-6;
        assert!(a.approx_eq(&b, 1e-5));
        b.data[12] += 1.0;
        assert!(!a.approx_eq(&b, 1e-5));
    }
}
