use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(400, 600).unwrap();
    assert_eq!(c.dims_u16().unwrap(), (400, 600));
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 400.0, 600.0));
}

#[test]
fn millis_add_saturates() {
    assert_eq!(Millis(100).add_ms(100), Millis(200));
    assert_eq!(Millis(u64::MAX).add_ms(1), Millis(u64::MAX));
}
