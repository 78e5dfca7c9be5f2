// Host-side tests for HSL colors and hex parsing.

use audiosphere_core::Rgb;

fn close(a: Rgb, b: Rgb) -> bool {
    (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5
}

#[test]
fn hue_zero_is_red() {
    let c = Rgb::from_hsl(0.0, 0.7, 0.5);
    assert!(close(c, Rgb::new(0.85, 0.15, 0.15)), "{c:?}");
}

#[test]
fn primary_hues() {
    assert!(close(Rgb::from_hsl(1.0 / 3.0, 1.0, 0.5), Rgb::new(0.0, 1.0, 0.0)));
    assert!(close(Rgb::from_hsl(2.0 / 3.0, 1.0, 0.5), Rgb::new(0.0, 0.0, 1.0)));
    assert!(close(Rgb::from_hsl(0.5, 1.0, 0.5), Rgb::new(0.0, 1.0, 1.0)));
}

#[test]
fn hue_one_wraps_to_red() {
    assert!(close(Rgb::from_hsl(1.0, 0.7, 0.5), Rgb::from_hsl(0.0, 0.7, 0.5)));
}

#[test]
fn zero_saturation_is_grey() {
    assert_eq!(Rgb::from_hsl(0.4, 0.0, 0.3), Rgb::new(0.3, 0.3, 0.3));
}

#[test]
fn emissive_lightness_is_darker() {
    let base = Rgb::from_hsl(0.6, 0.7, 0.5);
    let emissive = Rgb::from_hsl(0.6, 0.7, 0.2);
    assert!(emissive.r <= base.r && emissive.g <= base.g && emissive.b <= base.b);
}

#[test]
fn hex_parsing() {
    let c = Rgb::from_hex(0x222222);
    assert!(close(c, Rgb::new(34.0 / 255.0, 34.0 / 255.0, 34.0 / 255.0)));
    assert_eq!(Rgb::from_hex(0xffffff), Rgb::WHITE);
    assert_eq!(Rgb::from_hex(0x000000), Rgb::BLACK);
}

#[test]
fn linear_conversion_keeps_endpoints_and_darkens_midtones() {
    assert!(close(Rgb::WHITE.to_linear(), Rgb::WHITE));
    assert!(close(Rgb::BLACK.to_linear(), Rgb::BLACK));
    let mid = Rgb::new(0.5, 0.5, 0.5).to_linear();
    assert!((mid.r - 0.214).abs() < 1e-3, "{mid:?}");
}
