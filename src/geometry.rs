use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Length of one chain segment in pixels.
pub const ARM_LENGTH: f32 = 120.0;
/// Edge length of a ring in pixels.
pub const RING_EDGE: f32 = 140.0;
/// Hit radius of a chain node in pixels.
pub const NODE_RADIUS: f32 = 20.0;

/// The six hexagonal directions a side feature can grow in,
/// in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawDirection {
    Right,
    DownRight,
    DownLeft,
    Left,
    UpLeft,
    UpRight,
}

impl DrawDirection {
    /// The next direction clockwise (screen coordinates, y down).
    pub fn cycle(self) -> Self {
        match self {
            Self::Right => Self::DownRight,
            Self::DownRight => Self::DownLeft,
            Self::DownLeft => Self::Left,
            Self::Left => Self::UpLeft,
            Self::UpLeft => Self::UpRight,
            Self::UpRight => Self::Right,
        }
    }

    /// The alternating pair of segment angles (degrees, y down) that
    /// produces a zig-zag chain growing in this direction.
    pub fn zigzag_angles(self) -> [f32; 2] {
        match self {
            Self::Right => [-30.0, 30.0],
            Self::DownRight => [30.0, 90.0],
            Self::DownLeft => [90.0, 150.0],
            Self::Left => [150.0, 210.0],
            Self::UpLeft => [210.0, 270.0],
            Self::UpRight => [270.0, 330.0],
        }
    }

    /// Angle (degrees) along which a side ring is pushed away from its
    /// attachment node.
    pub fn attach_angle(self) -> f32 {
        match self {
            Self::Right => 0.0,
            Self::DownRight => 60.0,
            Self::DownLeft => 120.0,
            Self::Left => 180.0,
            Self::UpLeft => 240.0,
            Self::UpRight => 300.0,
        }
    }
}

/// A clickable vertex of a committed chain. The locant is the 1-based
/// position of the carbon along its chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub pos: Pos2,
    pub radius: f32,
    pub locant: usize,
}

impl Node {
    pub fn new(pos: Pos2, locant: usize) -> Self {
        Self {
            pos,
            radius: NODE_RADIUS,
            locant,
        }
    }

    pub fn contains(&self, p: Pos2) -> bool {
        self.pos.distance(p) <= self.radius
    }
}

/// Vertices of a zig-zag chain: `count` points starting at `start`,
/// each segment alternating between the direction's two angles.
pub fn zigzag_vertices(start: Pos2, dir: DrawDirection, count: usize) -> Vec<Pos2> {
    let [even, odd] = dir.zigzag_angles();
    let mut vertices = Vec::with_capacity(count);
    let mut p = start;
    vertices.push(p);
    for i in 0..count.saturating_sub(1) {
        let deg = if i % 2 == 0 { even } else { odd };
        p += Vec2::angled(deg.to_radians()) * ARM_LENGTH;
        vertices.push(p);
    }
    vertices
}

/// A laid-out ring. `connector` is the extra segment joining a side
/// ring back to its attachment node; `None` for a main-chain ring.
#[derive(Debug, Clone)]
pub struct RingLayout {
    pub vertices: Vec<Pos2>,
    pub connector: Option<(Pos2, Pos2)>,
}

/// Rotation (radians) past the attachment angle that centres a regular
/// `size`-gon on the attachment axis.
pub fn ring_rotation(size: usize) -> f32 {
    (90.0 - 180.0 / size as f32).to_radians()
}

/// Vertices of a regular `size`-gon with edge length [`RING_EDGE`].
///
/// With `dir == None` the first vertex sits at `attach` and the first
/// edge runs along the positive x axis. With a direction the whole ring
/// is pushed one edge length away from `attach` along the attachment
/// angle and rotated so it is centred on that axis.
pub fn ring_vertices(attach: Pos2, size: usize, dir: Option<DrawDirection>) -> RingLayout {
    let (phi, start, connector) = match dir {
        Some(d) => {
            let alpha = d.attach_angle().to_radians();
            let start = attach + Vec2::angled(alpha) * RING_EDGE;
            (alpha + ring_rotation(size), start, Some((attach, start)))
        }
        None => (0.0, attach, None),
    };

    // Stepping the edge angle by -360/size degrees closes the polygon.
    let theta = -std::f32::consts::TAU / size as f32;
    let mut vertices = Vec::with_capacity(size);
    let mut p = start;
    for i in 0..size {
        vertices.push(p);
        p += Vec2::angled(theta * i as f32 + phi) * RING_EDGE;
    }

    RingLayout { vertices, connector }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn zigzag_has_requested_vertex_count() {
        let v = zigzag_vertices(pos2(0.0, 0.0), DrawDirection::Right, 6);
        assert_eq!(v.len(), 6);
    }

    #[test]
    fn zigzag_right_alternates_above_and_below_axis() {
        let v = zigzag_vertices(pos2(0.0, 100.0), DrawDirection::Right, 5);
        for pair in v.windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
        assert!(v[1].y < v[0].y); // first segment at -30 degrees rises
        assert!((v[2].y - v[0].y).abs() < 0.001); // back on axis
    }

    #[test]
    fn zigzag_segments_have_arm_length() {
        let v = zigzag_vertices(pos2(10.0, 20.0), DrawDirection::UpRight, 4);
        for pair in v.windows(2) {
            assert!((pair[0].distance(pair[1]) - ARM_LENGTH).abs() < 0.01);
        }
    }

    #[test]
    fn main_ring_closes_on_start() {
        for size in 3..=10 {
            let ring = ring_vertices(pos2(300.0, 300.0), size, None);
            assert_eq!(ring.vertices.len(), size);
            assert!(ring.connector.is_none());
            // Walking one more edge from the last vertex lands on the first.
            let theta = -std::f32::consts::TAU / size as f32;
            let last = ring.vertices[size - 1];
            let closing = last + Vec2::angled(theta * (size - 1) as f32) * RING_EDGE;
            assert!(closing.distance(ring.vertices[0]) < 0.01);
        }
    }

    #[test]
    fn side_ring_is_offset_along_attachment_angle() {
        let attach = pos2(200.0, 200.0);
        let ring = ring_vertices(attach, 6, Some(DrawDirection::Right));
        let (from, to) = ring.connector.expect("side ring has a connector");
        assert_eq!(from, attach);
        assert!((to.x - (attach.x + RING_EDGE)).abs() < 0.01);
        assert!((to.y - attach.y).abs() < 0.01);
    }

    #[test]
    fn side_ring_centred_on_attachment_axis() {
        let attach = pos2(0.0, 0.0);
        let ring = ring_vertices(attach, 6, Some(DrawDirection::Right));
        let centroid = ring
            .vertices
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2())
            / ring.vertices.len() as f32;
        // Centroid lies on the positive x axis for a Right attachment.
        assert!(centroid.x > RING_EDGE);
        assert!(centroid.y.abs() < 0.1);
    }

    #[test]
    fn directions_cycle_through_all_six() {
        let mut dir = DrawDirection::UpRight;
        let mut seen = vec![dir];
        for _ in 0..5 {
            dir = dir.cycle();
            assert!(!seen.contains(&dir));
            seen.push(dir);
        }
        assert_eq!(dir.cycle(), DrawDirection::UpRight);
    }

    #[test]
    fn node_hit_test_uses_radius() {
        let n = Node::new(pos2(50.0, 50.0), 1);
        assert!(n.contains(pos2(50.0, 50.0 + NODE_RADIUS - 0.5)));
        assert!(!n.contains(pos2(50.0, 50.0 + NODE_RADIUS + 0.5)));
    }
}
