//! Membership function shapes.
//!
//! The raw primitives (`up`, `tri`, `trap`, ...) take their parameters and the
//! crisp value `x` directly. The factories (`trapezoid`, `triangle`, ...) bind
//! the parameters and return a closure suitable for
//! [`Expression::new`][crate::expression::Expression::new].
//!
//! ```text
//!  trapezoid(a, b, c, d)     rtrapezoid(a, b)       ltrapezoid(a, b)
//!   ^    .....                ^     ......          ^.....
//!   |   /     \               |    /                |     \
//!   |__/_______\__            |___/_______          |______\____
//!     a b     c d                a b                      a b
//!
//!  triangle(a, b)            rectangle(a, b)        step(a)
//!   ^      .                  ^   ......            ^   ......
//!   |     / \                 |   |    |            |   |
//!   |____/___\____            |___|____|___         |___|______
//!        a   b                    a    b                a
//! ```

/// Rising edge: 0 below `a`, linear on `[a, b)`, 1 from `b` on.
pub fn up(a: f64, b: f64, x: f64) -> f64 {
    if x < a {
        0.0
    } else if x < b {
        (x - a) / (b - a)
    } else {
        1.0
    }
}

/// Falling edge, the complement of [`up`].
pub fn down(a: f64, b: f64, x: f64) -> f64 {
    1.0 - up(a, b, x)
}

/// Triangle on `[a, b]` peaking at the midpoint.
pub fn tri(a: f64, b: f64, x: f64) -> f64 {
    let m = (a + b) / 2.0;
    let first = (x - a) / (m - a);
    let second = (b - x) / (b - m);
    first.min(second).max(0.0)
}

pub fn trap(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
    let first = (x - a) / (b - a);
    let second = (d - x) / (d - c);
    first.min(1.0).min(second).max(0.0)
}

pub fn ltrap(a: f64, b: f64, x: f64) -> f64 {
    ((b - x) / (b - a)).min(1.0).max(0.0)
}

pub fn rtrap(a: f64, b: f64, x: f64) -> f64 {
    ((x - a) / (b - a)).min(1.0).max(0.0)
}

/// Crisp indicator of the open interval `(a, b)`.
pub fn rect(a: f64, b: f64, x: f64) -> f64 {
    if a < x && x < b {
        1.0
    } else {
        0.0
    }
}

pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| trap(a, b, c, d, x)
}

/// Trapezoid with the right side open to infinity.
pub fn rtrapezoid(a: f64, b: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| rtrap(a, b, x)
}

/// Trapezoid with the left side open to infinity.
pub fn ltrapezoid(a: f64, b: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| ltrap(a, b, x)
}

pub fn triangle(a: f64, b: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| tri(a, b, x)
}

/// Crisp indicator of the closed interval `[a, b]`.
pub fn rectangle(a: f64, b: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| if a <= x && x <= b { 1.0 } else { 0.0 }
}

/// 1 strictly above `a`, 0 otherwise.
pub fn step(a: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| if x > a { 1.0 } else { 0.0 }
}

/// 1 up to and including `a`, 0 above.
pub fn nstep(a: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| if x <= a { 1.0 } else { 0.0 }
}

/// Sample points from `start` by `step` until `stop` is reached or passed.
///
/// The last point may overshoot `stop` by less than one step.
///
/// # Panics
///
/// Panics if `step` is not positive.
pub fn float_range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    assert!(step > 0.0, "Step should be positive");
    let mut result = vec![start];
    let mut current = start;
    while current < stop {
        current += step;
        result.push(current);
    }
    result
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_up_down() {
        assert_eq!(up(10.0, 20.0, 5.0), 0.0);
        assert_eq!(up(10.0, 20.0, 15.0), 0.5);
        assert_eq!(up(10.0, 20.0, 20.0), 1.0);
        assert_eq!(down(10.0, 20.0, 5.0), 1.0);
        assert_eq!(down(10.0, 20.0, 15.0), 0.5);
        assert_eq!(down(10.0, 20.0, 25.0), 0.0);
    }

    #[test]
    fn test_rtrapezoid() {
        let rt = rtrapezoid(10.0, 20.0);
        assert_eq!(rt(2.0), 0.0);
        assert_eq!(rt(10.0), 0.0);
        assert_eq!(rt(15.0), 0.5);
        assert_eq!(rt(20.0), 1.0);
        assert_eq!(rt(1000.0), 1.0);
    }

    #[test]
    fn test_ltrapezoid() {
        let lt = ltrapezoid(10.0, 20.0);
        assert_eq!(lt(2.0), 1.0);
        assert_eq!(lt(10.0), 1.0);
        assert_eq!(lt(15.0), 0.5);
        assert_eq!(lt(20.0), 0.0);
        assert_eq!(lt(1000.0), 0.0);
    }

    #[test]
    fn test_trapezoid() {
        let tr = trapezoid(10.0, 20.0, 30.0, 40.0);
        assert_eq!(tr(0.0), 0.0);
        assert_eq!(tr(10.0), 0.0);
        assert_eq!(tr(15.0), 0.5);
        assert_eq!(tr(20.0), 1.0);
        assert_eq!(tr(25.0), 1.0);
        assert_eq!(tr(30.0), 1.0);
        assert_eq!(tr(35.0), 0.5);
        assert_eq!(tr(40.0), 0.0);
        assert_eq!(tr(50.0), 0.0);
    }

    #[test]
    fn test_triangle() {
        let tr = triangle(10.0, 30.0);
        assert_eq!(tr(0.0), 0.0);
        assert_eq!(tr(10.0), 0.0);
        assert_eq!(tr(15.0), 0.5);
        assert_eq!(tr(20.0), 1.0);
        assert_eq!(tr(25.0), 0.5);
        assert_eq!(tr(30.0), 0.0);
        assert_eq!(tr(40.0), 0.0);
    }

    #[test]
    fn test_rectangle() {
        let rt = rectangle(3.0, 5.0);
        assert_eq!(rt(0.0), 0.0);
        assert_eq!(rt(2.0), 0.0);
        assert_eq!(rt(3.0), 1.0);
        assert_eq!(rt(4.0), 1.0);
        assert_eq!(rt(5.0), 1.0);
        assert_eq!(rt(6.0), 0.0);
    }

    #[test]
    fn test_rect_is_open() {
        assert_eq!(rect(3.0, 5.0, 3.0), 0.0);
        assert_eq!(rect(3.0, 5.0, 4.0), 1.0);
        assert_eq!(rect(3.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_step() {
        let st = step(3.0);
        assert_eq!(st(0.0), 0.0);
        assert_eq!(st(3.0), 0.0);
        assert_eq!(st(4.0), 1.0);
        assert_eq!(st(5.0), 1.0);
    }

    #[test]
    fn test_nstep() {
        let st = nstep(3.0);
        assert_eq!(st(0.0), 1.0);
        assert_eq!(st(3.0), 1.0);
        assert_eq!(st(4.0), 0.0);
        assert_eq!(st(6.0), 0.0);
    }

    #[test]
    fn test_float_range() {
        assert_eq!(float_range(0.0, 2.0, 0.5), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(float_range(0.0, 1.0, 0.75), vec![0.0, 0.75, 1.5]);
        assert_eq!(float_range(3.0, 1.0, 1.0), vec![3.0]);
    }
}
