use {
  super::*,
  crate::error::Result,
  std::f64::consts::{FRAC_PI_2, FRAC_PI_6, PI}
};

const EPS: f64 = 1e-9;

fn close(a: V2, b: V2) -> bool {
  (a - b).length() < EPS
}

#[test] fn arithmetic() -> Result<()> {
  let a = V2::new(3.0, 4.0);
  let b = V2::new(-1.0, 2.0);
  assert_eq!(a + b, V2::new(2.0, 6.0));
  assert_eq!(a - b, V2::new(4.0, 2.0));
  assert_eq!(a.scaled(2.0)?, V2::new(6.0, 8.0));
  assert_eq!(a.divided(2.0)?, V2::new(1.5, 2.0));
  assert_eq!(a.length(), 5.0);
  Ok(())
}

#[test] fn invalid_scale_factor() {
  let a = V2::new(1.0, 1.0);
  assert_eq!(a.divided(0.0), Err(Error::InvalidScaleFactor(0.0)));
  assert!(matches!(a.scaled(f64::NAN), Err(Error::InvalidScaleFactor(_))));
  assert!(matches!(a.divided(f64::INFINITY), Err(Error::InvalidScaleFactor(_))));
}

#[test] fn heading() {
  assert_eq!(V2::new(1.0, 0.0).heading(), 0.0);
  assert!((V2::new(0.0, 1.0).heading() - FRAC_PI_2).abs() < EPS);
  assert!((V2::new(-1.0, 0.0).heading() - PI).abs() < EPS);
}

#[test] fn unit_length() -> Result<()> {
  for v in [V2::new(3.0, 4.0), V2::new(-1e-6, 2e-7), V2::new(1e6, -3e5), V2::new(0.0, -7.0)] {
    assert!((v.unit()?.length() - 1.0).abs() < EPS);
  }
  Ok(())
}

#[test] fn unit_of_zero_vector() {
  assert_eq!(V2::<f64>::zero().unit(), Err(Error::DegenerateVector));
  assert_eq!(V2::new(0.0, 0.0).unit(), Err(Error::DegenerateVector));
  assert_eq!(V2::new(f64::NAN, 0.0).unit(), Err(Error::DegenerateVector));
}

#[test] fn rotation_preserves_length() {
  let v = V2::new(12.5, -7.25);
  for i in -12..=12 {
    let angle = i as f64 * FRAC_PI_6 / 2.0;
    assert!((v.rotated(angle).length() - v.length()).abs() < EPS);
  }
}

#[test] fn rotation_is_counter_clockwise() {
  assert!(close(V2::new(1.0, 0.0).rotated(FRAC_PI_2), V2::new(0.0, 1.0)));
  assert!(close(V2::new(0.0, 1.0).rotated(FRAC_PI_2), V2::new(-1.0, 0.0)));
  assert!(close(V2::new(2.0, 0.0).rotated(-FRAC_PI_2), V2::new(0.0, -2.0)));
  let v = V2::new(3.0, 1.0);
  assert!(close(v.rotated(0.7).rotated(-0.7), v));
}

#[test] fn segment() {
  let s = Segment::new(P2::new(0.0, 0.0), P2::new(4.0, -2.0));
  assert_eq!(s.midpoint(), P2::new(2.0, -1.0));
  assert_eq!(s.direction(), V2::new(4.0, -2.0));
  assert!(!s.is_degenerate());
  assert!(Segment::new(P2::new(1.0, 1.0), P2::new(1.0, 1.0)).is_degenerate());
  assert_eq!(s.key(), Segment::new(P2::new(0.0, 0.0), P2::new(4.0, -2.0)).key());
  assert_ne!(s.key(), Segment::new(P2::new(4.0, -2.0), P2::new(0.0, 0.0)).key());
}
