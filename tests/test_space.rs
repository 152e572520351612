use bempp_space::element::{create_family, Family, LagrangeElementFamily};
use bempp_space::function::function_space;
use bempp_space::grid::regular_sphere;
use bempp_space::traits::{FunctionSpace, Grid};
use bempp_space::types::{Continuity, ReferenceCellType};
use bempp_space::Result;
use paste::paste;

extern crate blas_src;
extern crate lapack_src;

fn dp0_size(grid: &impl Grid) -> usize {
    grid.entity_count(ReferenceCellType::Triangle)
}

fn p1_size(grid: &impl Grid) -> usize {
    grid.entity_count(ReferenceCellType::Point)
}

fn p2_size(grid: &impl Grid) -> usize {
    grid.entity_count(ReferenceCellType::Point) + grid.entity_count(ReferenceCellType::Interval)
}

macro_rules! space_size_test {
    ($(($level:literal, $name:ident, $degree:literal, $continuity:ident)),+) => {
        $(
            paste! {
                #[test]
                fn [<test_ $name _size_level_ $level>]() -> Result<()> {
                    let grid = regular_sphere::<f64>($level)?;
                    let family = create_family::<f64>(
                        Family::Lagrange,
                        $degree,
                        space_size_test!(@continuity $continuity),
                    )?;
                    let space = function_space(&grid, &family)?;

                    assert_eq!(space.local_size(), [<$name _size>](&grid));
                    assert_eq!(space.local_size(), space.global_size());
                    Ok(())
                }
            }
        )+
    };
    (@continuity default) => { Continuity::default() };
    (@continuity $c:ident) => { Continuity::$c };
}

space_size_test!(
    (0, dp0, 0, Discontinuous),
    (1, dp0, 0, Discontinuous),
    (2, dp0, 0, Discontinuous),
    (3, dp0, 0, Discontinuous),
    (0, p1, 1, default),
    (1, p1, 1, default),
    (2, p1, 1, default),
    (3, p1, 1, default),
    (0, p2, 2, default),
    (1, p2, 2, default),
    (2, p2, 2, default),
    (3, p2, 2, default)
);

#[test]
fn test_sizes_grow_with_refinement() {
    let mut previous = [0; 3];
    for level in 0..4 {
        let grid = regular_sphere::<f64>(level).unwrap();
        let sizes = [
            (0, Continuity::Discontinuous),
            (1, Continuity::Continuous),
            (2, Continuity::Continuous),
        ]
        .map(|(degree, continuity)| {
            let family = LagrangeElementFamily::<f64>::new(degree, continuity);
            function_space(&grid, &family).unwrap().global_size()
        });
        for (size, prev) in sizes.iter().zip(&previous) {
            assert!(size > prev);
        }
        previous = sizes;
    }
}

#[test]
fn test_sizes_closed_form() {
    for level in 0..4 {
        let grid = regular_sphere::<f64>(level).unwrap();
        let four_l = usize::pow(4, level);
        let dp0 = LagrangeElementFamily::<f64>::new(0, Continuity::Discontinuous);
        let p1 = LagrangeElementFamily::<f64>::new(1, Continuity::Continuous);
        let p2 = LagrangeElementFamily::<f64>::new(2, Continuity::Continuous);
        assert_eq!(function_space(&grid, &dp0).unwrap().local_size(), 8 * four_l);
        assert_eq!(function_space(&grid, &p1).unwrap().local_size(), 4 * four_l + 2);
        assert_eq!(
            function_space(&grid, &p2).unwrap().local_size(),
            16 * four_l + 2
        );
    }
}

#[test]
fn test_discontinuous_higher_degree() {
    let grid = regular_sphere::<f64>(1).unwrap();
    for degree in 1..4 {
        let family = LagrangeElementFamily::<f64>::new(degree, Continuity::Discontinuous);
        let space = function_space(&grid, &family).unwrap();
        assert_eq!(
            space.local_size(),
            grid.cell_count() * (degree + 1) * (degree + 2) / 2
        );
    }
}

#[test]
fn test_continuous_degree_zero_fails() {
    assert!(create_family::<f64>(Family::Lagrange, 0, Continuity::default()).is_err());
}

#[test]
fn test_raviart_thomas_size() {
    let grid = regular_sphere::<f64>(2).unwrap();
    let family = create_family::<f64>(Family::RaviartThomas, 1, Continuity::default()).unwrap();
    let space = function_space(&grid, &family).unwrap();
    assert_eq!(
        space.local_size(),
        grid.entity_count(ReferenceCellType::Interval)
    );
}
