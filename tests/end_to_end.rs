use fractal_field::core::fractals::escape_time::escape_time;
use fractal_field::{
    Complex, ComplexRect, EscapeTimeAlgorithm, Extended, FractalParams, FractalVariant, GenerationStrategy,
    NeverCancel, Point, PointGrid, Quadruple, Real, ScreenResolution, fit_resolution, sample_point_grid,
};

fn sample_region<R: Real>(rect: ComplexRect<R>, max_pixels: u32, params: FractalParams<R>) -> PointGrid<R> {
    let mapping = fit_resolution(&rect, max_pixels).unwrap();
    let algorithm = EscapeTimeAlgorithm::new(rect, mapping, params);

    sample_point_grid(&algorithm, GenerationStrategy::Parallel, &NeverCancel).unwrap()
}

fn default_mandelbrot() -> PointGrid<f64> {
    sample_region(
        ComplexRect::default_region(),
        100,
        FractalParams::mandelbrot(100).unwrap(),
    )
}

fn bounds<R: Real>(x_min: &str, x_max: &str, y_min: &str, y_max: &str) -> ComplexRect<R> {
    ComplexRect::from_bounds(
        R::parse(x_min).unwrap(),
        R::parse(x_max).unwrap(),
        R::parse(y_min).unwrap(),
        R::parse(y_max).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_default_view_at_one_hundred_pixels() {
    let grid = default_mandelbrot();

    assert_eq!(grid.resolution(), ScreenResolution::new(100, 74).unwrap());
    assert_eq!(grid.len(), 7400);

    let corner = grid.get(Point { x: 0, y: 0 }).unwrap();
    assert_eq!((corner.x0, corner.y0), (-2.5, -1.3));
    assert_eq!(corner.iteration_count, 1);
}

#[test]
fn test_default_view_membership_mask() {
    let grid = default_mandelbrot();
    let rows: Vec<Vec<bool>> = grid
        .rows()
        .map(|row| row.iter().map(|sample| grid.is_member(sample)).collect())
        .collect();

    // Row 37 lies on the real axis: x = -0.19 is inside the main cardioid, x = 0.895 is not.
    assert!(rows[37][66]);
    assert!(!rows[37][97]);

    // The set stays inside |y| < 1.2 and x > -2.1.
    assert!(rows[0].iter().all(|&member| !member));
    assert!(rows.iter().all(|row| !row[0]));

    let members = grid.member_count();
    assert!(members > 0 && members < grid.len() / 2);
}

#[test]
fn test_repeated_runs_are_identical() {
    assert_eq!(default_mandelbrot(), default_mandelbrot());
}

#[test]
fn test_serial_and_parallel_grids_match_at_quadruple_width() {
    let rect: ComplexRect<Quadruple> = bounds("-0.8", "-0.7", "0.05", "0.15");
    let mapping = fit_resolution(&rect, 24).unwrap();
    let algorithm = EscapeTimeAlgorithm::new(rect, mapping, FractalParams::mandelbrot(200).unwrap());

    let serial = sample_point_grid(&algorithm, GenerationStrategy::Serial, &NeverCancel).unwrap();
    let parallel = sample_point_grid(&algorithm, GenerationStrategy::Parallel, &NeverCancel).unwrap();

    assert_eq!(serial, parallel);
}

fn distinct_in_first_row<R: Real>(grid: &PointGrid<R>) -> usize {
    let row = grid.rows().next().unwrap();

    1 + row.windows(2).filter(|pair| pair[0].x0 != pair[1].x0).count()
}

#[test]
fn test_wider_precision_resolves_a_deep_zoom() {
    let region = ("-0.75", "-0.749999999999999", "0.1", "0.100000000000001");

    let standard = sample_region(
        bounds::<f64>(region.0, region.1, region.2, region.3),
        100,
        FractalParams::mandelbrot(50).unwrap(),
    );
    let extended = sample_region(
        bounds::<Extended>(region.0, region.1, region.2, region.3),
        100,
        FractalParams::mandelbrot(50).unwrap(),
    );
    let quadruple = sample_region(
        bounds::<Quadruple>(region.0, region.1, region.2, region.3),
        100,
        FractalParams::mandelbrot(50).unwrap(),
    );

    let standard_width = standard.resolution().width() as usize;
    assert!(distinct_in_first_row(&standard) < standard_width);
    assert_eq!(distinct_in_first_row(&extended), extended.resolution().width() as usize);
    assert_eq!(distinct_in_first_row(&quadruple), quadruple.resolution().width() as usize);
}

#[test]
fn test_julia_with_zero_constant_escapes_later_closer_to_the_unit_circle() {
    let zero = Complex::new(0.0, 0.0);
    let counts: Vec<u32> = [0.5, 0.1, 0.01, 0.001, 1e-4]
        .iter()
        .map(|epsilon| escape_time(Complex::new(1.0 + epsilon, 0.0), zero.clone(), 100))
        .collect();

    assert_eq!(counts, vec![1, 3, 7, 10, 13]);
    assert!(counts.windows(2).all(|pair| pair[0] < pair[1]));

    for start in [(1.0, 0.0), (-1.0, 0.0), (0.5, 0.0), (0.3, 0.4), (0.0, 0.0)] {
        assert_eq!(escape_time(Complex::new(start.0, start.1), zero.clone(), 100), 100);
    }
}

#[test]
fn test_julia_grid_uses_the_fixed_constant() {
    let rect: ComplexRect<f64> = bounds("-1.5", "1.5", "-1.0", "1.0");
    let params = FractalParams::new(FractalVariant::default_julia(), 256).unwrap();
    let grid = sample_region(rect, 60, params);

    assert_eq!(grid.resolution(), ScreenResolution::new(60, 40).unwrap());
    assert!(grid.member_count() > 0);
    assert!(grid.member_count() < grid.len());
}
