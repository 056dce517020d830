use {
  euclid::Box2D,
  crate::geometry::{P2, PixelSpace, Segment}
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: P2<T>) -> T;
}

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// A segment stroked with round caps, `radius` pixels on each side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Capsule {
  pub segment: Segment,
  pub radius: f64,
}

impl SDF<f64> for Capsule {
  fn sdf(&self, pixel: P2) -> f64 {
    let pa = pixel - self.segment.start;
    let ba = self.segment.direction();
    let h = match ba.square_length() {
      l if l > 0.0 => (pa.dot(ba) / l).clamp(0.0, 1.0),
      _ => 0.0
    };
    (pa - ba * h).length() - self.radius
  }
}

impl BoundingBox<f64, PixelSpace> for Capsule {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> {
    Box2D::from_points([self.segment.start, self.segment.end])
      .inflate(self.radius, self.radius)
  }
}

#[cfg(test)] mod tests {
  use super::*;

  #[test] fn capsule_distance() {
    let capsule = Capsule {
      segment: Segment::new(P2::new(0.0, 0.0), P2::new(10.0, 0.0)),
      radius: 1.0
    };
    assert_eq!(capsule.sdf(P2::new(5.0, 0.0)), -1.0);
    assert_eq!(capsule.sdf(P2::new(5.0, 3.0)), 2.0);
    assert_eq!(capsule.sdf(P2::new(-3.0, 0.0)), 2.0);
    assert_eq!(capsule.sdf(P2::new(13.0, 4.0)), 4.0);
  }

  #[test] fn degenerate_capsule_is_a_disc() {
    let point = P2::new(2.0, 2.0);
    let capsule = Capsule { segment: Segment::new(point, point), radius: 0.5 };
    assert_eq!(capsule.sdf(P2::new(2.0, 5.0)), 2.5);
    let bounding = capsule.bounding_box();
    assert_eq!(bounding.min, P2::new(1.5, 1.5));
    assert_eq!(bounding.max, P2::new(2.5, 2.5));
  }
}
