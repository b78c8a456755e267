use super::{Point2, TOLERANCE};

/// Parametric segment-rectangle clipping in 2D (Liang-Barsky).
///
/// The segment is `p0 + t * (p1 - p0)` for `t` in `[0, 1]`; the rectangle is
/// the closed box `[min_x, max_x] x [min_y, max_y]`. Returns the clipped
/// parameter range `(t_enter, t_exit)` if the segment touches the box.
#[must_use]
pub fn segment_rect_clip_2d(
    p0: &Point2,
    p1: &Point2,
    min: &Point2,
    max: &Point2,
) -> Option<(f64, f64)> {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    // Each boundary as (p, q): the segment is inside where t * p <= q.
    let boundaries = [
        (-dx, p0.x - min.x),
        (dx, max.x - p0.x),
        (-dy, p0.y - min.y),
        (dy, max.y - p0.y),
    ];

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;
    for (p, q) in boundaries {
        if p.abs() < TOLERANCE {
            // Parallel to this boundary: reject if outside it.
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
        if t_enter > t_exit {
            return None;
        }
    }
    Some((t_enter, t_exit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn segment_crossing_box() {
        let hit = segment_rect_clip_2d(&p(-5.0, 5.0), &p(15.0, 5.0), &p(0.0, 0.0), &p(10.0, 10.0));
        let (t0, t1) = hit.unwrap_or((f64::NAN, f64::NAN));
        assert!((t0 - 0.25).abs() < TOLERANCE);
        assert!((t1 - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn segment_inside_box() {
        let hit = segment_rect_clip_2d(&p(2.0, 2.0), &p(8.0, 3.0), &p(0.0, 0.0), &p(10.0, 10.0));
        assert_eq!(hit, Some((0.0, 1.0)));
    }

    #[test]
    fn segment_missing_box() {
        assert!(segment_rect_clip_2d(&p(-5.0, 11.0), &p(15.0, 11.0), &p(0.0, 0.0), &p(10.0, 10.0)).is_none());
        assert!(segment_rect_clip_2d(&p(-5.0, -5.0), &p(-1.0, 20.0), &p(0.0, 0.0), &p(10.0, 10.0)).is_none());
    }

    #[test]
    fn segment_stopping_short() {
        assert!(segment_rect_clip_2d(&p(-10.0, 5.0), &p(-1.0, 5.0), &p(0.0, 0.0), &p(10.0, 10.0)).is_none());
    }

    #[test]
    fn diagonal_segment_clips_corner() {
        let hit = segment_rect_clip_2d(&p(-1.0, 9.0), &p(3.0, 13.0), &p(0.0, 0.0), &p(10.0, 10.0));
        assert!(hit.is_some());
        let miss = segment_rect_clip_2d(&p(-3.0, 9.0), &p(1.0, 13.0), &p(0.0, 0.0), &p(10.0, 10.0));
        assert!(miss.is_none());
    }
}
