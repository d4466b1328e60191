use approx::assert_abs_diff_eq;
use parabolic_trajectory::core::ballistics::LaunchParameters;
use parabolic_trajectory::core::constants::EARTH_GRAVITY_MPS2;
use parabolic_trajectory::core::display::DisplayValues;
use parabolic_trajectory::core::inputs::RawInputs;
use parabolic_trajectory::core::pipeline::simulate;
use parabolic_trajectory::core::plot::{ImageFormat, write_image};
use parabolic_trajectory::core::render::{RenderOptions, RenderOutcome};
use parabolic_trajectory::core::surface::{DrawCommand, RecordingSurface, Rgb};

fn curve(surface: &RecordingSurface) -> Option<&Vec<(f64, f64)>> {
    surface.commands.iter().find_map(|cmd| match cmd {
        DrawCommand::Path { points, stroke } if stroke.color == Rgb::RED => Some(points),
        _ => None,
    })
}

#[test]
fn elevated_launch_end_to_end() {
    let params = RawInputs {
        height: "10",
        speed: "15",
        angle: "30",
        gravity: "9.81",
    }
    .to_params();
    let mut surface = RecordingSurface::new();
    let report = simulate(params, &mut surface, (800.0, 400.0), &RenderOptions::default())
        .expect("recording surface never fails");

    assert_eq!(report.display.apex_height, "12.87");
    assert_eq!(report.display.horizontal_range, "30.97");
    assert_eq!(report.display.time_of_flight, "2.38");

    let RenderOutcome::Drawn { view, curve_points } = report.outcome else {
        panic!("expected a drawn trajectory");
    };
    assert_eq!(curve_points, 1001);
    let points = curve(&surface).expect("curve drawn");
    let landing = points.last().expect("landing sample");
    assert_abs_diff_eq!(landing.1, view.baseline_row(), epsilon = 0.5);
}

#[test]
fn every_curve_point_fits_on_the_surface() {
    let sizes = [(800.0, 400.0), (400.0, 800.0), (120.0, 90.0)];
    let launches = [
        (0.0, 10.0, 45.0),
        (10.0, 15.0, 30.0),
        (250.0, 3.0, 5.0),
        (0.0, 60.0, 89.0),
        (15.0, 40.0, 60.0),
    ];
    for (w, h) in sizes {
        for (height, speed, angle) in launches {
            let params = LaunchParameters::new(height, speed, angle, EARTH_GRAVITY_MPS2);
            let mut surface = RecordingSurface::new();
            simulate(params, &mut surface, (w, h), &RenderOptions::default()).expect("simulate");

            for &(px, py) in curve(&surface).expect("curve drawn") {
                assert!(px >= -1e-9 && px <= w + 1e-9, "px={px} for {params:?} on {w}x{h}");
                assert!(py >= -1e-9 && py <= h + 1e-9, "py={py} for {params:?} on {w}x{h}");
            }
        }
    }
}

#[test]
fn invalid_then_valid_input_recovers() {
    let mut surface = RecordingSurface::new();
    let options = RenderOptions::default();

    let bad = LaunchParameters::new(0.0, -5.0, 45.0, EARTH_GRAVITY_MPS2);
    let report = simulate(bad, &mut surface, (800.0, 400.0), &options).expect("simulate");
    assert_eq!(report.display, DisplayValues::placeholder());
    assert!(surface.is_blank());

    let good = LaunchParameters::new(0.0, 5.0, 45.0, EARTH_GRAVITY_MPS2);
    let report = simulate(good, &mut surface, (800.0, 400.0), &options).expect("simulate");
    assert!(report.solution.is_valid());
    assert!(curve(&surface).is_some());
}

#[test]
fn writes_svg_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("flight.svg");
    let params = LaunchParameters::new(2.0, 20.0, 60.0, EARTH_GRAVITY_MPS2);

    let report = write_image(
        &path,
        ImageFormat::Svg,
        (640, 320),
        params,
        &RenderOptions::default(),
    )
    .expect("write svg");

    assert!(report.solution.is_valid());
    let contents = std::fs::read_to_string(&path).expect("read svg");
    assert!(contents.contains("<polyline"));
}

#[test]
fn writes_blank_png_for_invalid_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("blank.png");
    let params = LaunchParameters::new(0.0, 10.0, 45.0, 0.0);

    let report = write_image(
        &path,
        ImageFormat::Png,
        (200, 100),
        params,
        &RenderOptions::default(),
    )
    .expect("write png");

    assert!(matches!(report.outcome, RenderOutcome::NoTrajectory(_)));
    let bytes = std::fs::read(&path).expect("read png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
