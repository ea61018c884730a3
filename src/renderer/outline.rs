//! Outline geometry for shape proxies
//!
//! Shared outlines (box, circle, capsule template, particle, line) are sampled
//! once from closed-form circle equations in the simulation plane, then lifted
//! into render space by inserting a zero at the normal axis. Convex hulls,
//! heightfields and sized capsules are rebuilt per instance.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};
use std::sync::Arc;

use glam::{Vec2, Vec3};

use crate::consts::{BOX_CORNER_RADIUS, CIRCLE_PRECISION, PARTICLE_PRECISION, PARTICLE_RADIUS};
use crate::settings::NormalAxis;
use crate::sim::ShapeKind;

/// Polyline in render space (consecutive points are joined)
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Vec3>,
}

impl Outline {
    fn lift(samples: impl IntoIterator<Item = Vec2>, normal: NormalAxis) -> Self {
        Self {
            points: samples.into_iter().map(|p| normal.lift(p)).collect(),
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True if the last point repeats the first
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }
}

/// `segments + 1` samples around a circle, first point repeated at the end
fn circle_samples(radius: f32, segments: usize) -> Vec<Vec2> {
    (0..=segments)
        .map(|i| {
            let theta = i as f32 * TAU / segments as f32;
            Vec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Unit square corners sampled from the circle equation at 45° offsets
fn box_samples() -> Vec<Vec2> {
    (0..=4)
        .map(|i| {
            let theta = i as f32 * FRAC_PI_2 + FRAC_PI_4;
            Vec2::new(BOX_CORNER_RADIUS * theta.cos(), BOX_CORNER_RADIUS * theta.sin())
        })
        .collect()
}

/// Unit capsule template: a circle starting at the bottom, walking the right
/// half then the left half, with the top point duplicated so each cap owns one
/// copy, closed by repeating the first point.
fn capsule_samples() -> Vec<Vec2> {
    let mut samples: Vec<Vec2> = (0..=CIRCLE_PRECISION)
        .map(|i| {
            let theta = i as f32 * TAU / CIRCLE_PRECISION as f32;
            Vec2::new(theta.sin(), -theta.cos())
        })
        .collect();
    let mid = CIRCLE_PRECISION / 2;
    samples.insert(mid, samples[mid]);
    samples.push(samples[0]);
    samples
}

/// Index of the last sample on the leading (+x) cap of the capsule template
const CAPSULE_LEADING_END: usize = CIRCLE_PRECISION / 2;

/// Stretch the unit capsule template into a stadium of the given size
///
/// Samples are scaled by `radius` and pushed `±length / 2` along the long (x)
/// axis: the leading half and the closing point go right, the rest go left. The
/// caps stay circular, which a non-uniform mesh scale could not guarantee.
fn stretch_capsule(template: &[Vec2], length: f32, radius: f32) -> Vec<Vec2> {
    let last = template.len() - 1;
    let half = length / 2.0;
    template
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let side = if i <= CAPSULE_LEADING_END || i == last {
                1.0
            } else {
                -1.0
            };
            p * radius + Vec2::new(side * half, 0.0)
        })
        .collect()
}

/// Precomputed outlines keyed by shape type
#[derive(Debug, Clone)]
pub struct OutlineTable {
    normal: NormalAxis,
    box_outline: Arc<Outline>,
    circle: Arc<Outline>,
    capsule: Arc<Outline>,
    particle: Arc<Outline>,
    line: Arc<Outline>,
    capsule_template: Vec<Vec2>,
}

impl OutlineTable {
    pub fn new(normal: NormalAxis) -> Self {
        let capsule_template = capsule_samples();
        Self {
            normal,
            box_outline: Arc::new(Outline::lift(box_samples(), normal)),
            circle: Arc::new(Outline::lift(circle_samples(1.0, CIRCLE_PRECISION), normal)),
            capsule: Arc::new(Outline::lift(capsule_template.iter().copied(), normal)),
            particle: Arc::new(Outline::lift(
                circle_samples(PARTICLE_RADIUS, PARTICLE_PRECISION),
                normal,
            )),
            line: Arc::new(Outline::lift(
                [Vec2::new(-0.5, 0.0), Vec2::new(0.5, 0.0)],
                normal,
            )),
            capsule_template,
        }
    }

    pub fn normal(&self) -> NormalAxis {
        self.normal
    }

    pub fn box_outline(&self) -> &Arc<Outline> {
        &self.box_outline
    }

    pub fn circle(&self) -> &Arc<Outline> {
        &self.circle
    }

    /// Unit capsule (radius 1, length 0)
    pub fn capsule_template(&self) -> &Arc<Outline> {
        &self.capsule
    }

    pub fn particle(&self) -> &Arc<Outline> {
        &self.particle
    }

    pub fn line(&self) -> &Arc<Outline> {
        &self.line
    }

    /// Capsule outline with caps of `radius` whose centers are `length` apart
    pub fn capsule(&self, length: f32, radius: f32) -> Outline {
        Outline::lift(
            stretch_capsule(&self.capsule_template, length, radius),
            self.normal,
        )
    }

    /// Hull outline closed by repeating the first vertex
    pub fn convex(&self, vertices: &[Vec2]) -> Option<Outline> {
        let first = *vertices.first()?;
        Some(Outline::lift(
            vertices.iter().copied().chain(std::iter::once(first)),
            self.normal,
        ))
    }

    /// Open polyline through `(i * element_width, heights[i])`
    pub fn heightfield(&self, heights: &[f32], element_width: f32) -> Option<Outline> {
        if heights.is_empty() {
            return None;
        }
        Some(Outline::lift(
            heights
                .iter()
                .enumerate()
                .map(|(i, &h)| Vec2::new(i as f32 * element_width, h)),
            self.normal,
        ))
    }

    /// Outline for a shape, shared where the shape has a table entry
    ///
    /// `None` means the shape has nothing drawable (empty hull or heightfield);
    /// the pool leaves a hole at that slot.
    pub fn for_shape(&self, kind: &ShapeKind) -> Option<Arc<Outline>> {
        match kind {
            ShapeKind::Box { .. } => Some(Arc::clone(&self.box_outline)),
            ShapeKind::Circle { .. } => Some(Arc::clone(&self.circle)),
            ShapeKind::Capsule { length, radius } => Some(Arc::new(self.capsule(*length, *radius))),
            ShapeKind::Convex { vertices } => self.convex(vertices).map(Arc::new),
            ShapeKind::Heightfield {
                heights,
                element_width,
            } => self.heightfield(heights, *element_width).map(Arc::new),
            ShapeKind::Line { .. } | ShapeKind::Plane => Some(Arc::clone(&self.line)),
            ShapeKind::Particle => Some(Arc::clone(&self.particle)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_box_is_unit_square() {
        let table = OutlineTable::new(NormalAxis::Z);
        let outline = table.box_outline();
        assert_eq!(outline.len(), 5);
        for p in outline.points() {
            assert!((p.x.abs() - 0.5).abs() < EPS, "x = {}", p.x);
            assert!((p.y.abs() - 0.5).abs() < EPS, "y = {}", p.y);
            assert_eq!(p.z, 0.0);
        }
        assert!((outline.points()[0] - outline.points()[4]).length() < EPS);
    }

    #[test]
    fn test_circle_samples() {
        let table = OutlineTable::new(NormalAxis::Z);
        let circle = table.circle();
        assert_eq!(circle.len(), CIRCLE_PRECISION + 1);
        for p in circle.points() {
            assert!((p.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_normal_axis_is_zero_everywhere() {
        let table = OutlineTable::new(NormalAxis::Y);
        for outline in [table.box_outline(), table.circle(), table.particle(), table.line()] {
            assert!(outline.points().iter().all(|p| p.y == 0.0));
        }
    }

    #[test]
    fn test_particle_hexagon() {
        let table = OutlineTable::new(NormalAxis::X);
        let particle = table.particle();
        assert_eq!(particle.len(), PARTICLE_PRECISION + 1);
        for p in particle.points() {
            assert!((p.length() - PARTICLE_RADIUS).abs() < 1e-6);
        }
    }

    #[test]
    fn test_line_segment() {
        let table = OutlineTable::new(NormalAxis::X);
        assert_eq!(
            table.line().points(),
            &[Vec3::new(0.0, -0.5, 0.0), Vec3::new(0.0, 0.5, 0.0)]
        );
    }

    #[test]
    fn test_capsule_template_layout() {
        let template = capsule_samples();
        assert_eq!(template.len(), CIRCLE_PRECISION + 3);
        assert_eq!(template[CAPSULE_LEADING_END], template[CAPSULE_LEADING_END + 1]);
        assert_eq!(template[0], template[template.len() - 1]);
    }

    #[test]
    fn test_capsule_caps_are_circular() {
        let table = OutlineTable::new(NormalAxis::Z);
        let (length, radius) = (3.0, 0.5);
        let outline = table.capsule(length, radius);
        let last = outline.len() - 1;
        let right = Vec3::new(length / 2.0, 0.0, 0.0);
        let left = Vec3::new(-length / 2.0, 0.0, 0.0);
        for (i, p) in outline.points().iter().enumerate() {
            let center = if i <= CAPSULE_LEADING_END || i == last { right } else { left };
            assert!(((*p - center).length() - radius).abs() < EPS, "point {} off cap", i);
        }
        assert!(outline.is_closed());
    }

    #[test]
    fn test_capsule_long_axis_ignores_normal() {
        let table = OutlineTable::new(NormalAxis::X);
        let outline = table.capsule(2.0, 1.0);
        assert!(outline.points().iter().all(|p| p.x == 0.0));
        let max_y = outline.points().iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!((max_y - 2.0).abs() < EPS);
    }

    #[test]
    fn test_convex_closes_loop() {
        let table = OutlineTable::new(NormalAxis::Z);
        let tri = [Vec2::ZERO, Vec2::X, Vec2::Y];
        let outline = table.convex(&tri).unwrap();
        assert_eq!(outline.len(), 4);
        assert!(outline.is_closed());
        assert!(table.convex(&[]).is_none());
    }

    #[test]
    fn test_heightfield_spacing() {
        let table = OutlineTable::new(NormalAxis::Z);
        let outline = table.heightfield(&[1.0, 2.0, 0.5], 0.25).unwrap();
        assert_eq!(
            outline.points(),
            &[
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.25, 2.0, 0.0),
                Vec3::new(0.5, 0.5, 0.0)
            ]
        );
        assert!(table.heightfield(&[], 1.0).is_none());
    }

    #[test]
    fn test_shared_entries_are_shared() {
        let table = OutlineTable::new(NormalAxis::Z);
        let a = table.for_shape(&ShapeKind::Box {
            width: 1.0,
            height: 2.0,
        });
        let b = table.for_shape(&ShapeKind::Box {
            width: 3.0,
            height: 4.0,
        });
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        let plane = table.for_shape(&ShapeKind::Plane).unwrap();
        assert!(Arc::ptr_eq(&plane, table.line()));
    }
}
