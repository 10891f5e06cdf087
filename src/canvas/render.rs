use egui::{Color32, Painter, Pos2, Rect, Stroke};

use super::theme;
use super::{BondStep, Canvas, MainStep, SideStep};
use crate::geometry::{self, DrawDirection, NODE_RADIUS, ring_vertices, zigzag_vertices};
use crate::palette::ActionType;

/// Paint the whole canvas: background, committed compound, then the
/// ghost preview for the active step on top.
pub fn paint(canvas: &Canvas, painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, theme::BACKGROUND);
    draw_committed(canvas, painter);
    draw_ghost(canvas, painter);
}

fn chain_stroke(color: Color32) -> Stroke {
    Stroke::new(theme::CHAIN_WIDTH, color)
}

fn draw_polyline(painter: &Painter, vertices: &[Pos2], closed: bool, stroke: Stroke) {
    for pair in vertices.windows(2) {
        painter.line_segment([pair[0], pair[1]], stroke);
    }
    if closed && vertices.len() > 2 {
        painter.line_segment([vertices[vertices.len() - 1], vertices[0]], stroke);
    }
}

fn draw_committed(canvas: &Canvas, painter: &Painter) {
    let stroke = chain_stroke(theme::CHAIN);

    // Main chain
    if canvas.main_committed() {
        let vertices: Vec<Pos2> = canvas.main_nodes().iter().map(|n| n.pos).collect();
        draw_polyline(painter, &vertices, canvas.compound().main().is_cyclo(), stroke);
    }

    // Side chains, from their recorded attachment points
    for (attachment, chain) in canvas
        .side_attachments()
        .iter()
        .zip(canvas.compound().sides())
    {
        if chain.is_cyclo() {
            let ring = ring_vertices(attachment.pos, chain.size(), Some(attachment.dir));
            draw_polyline(painter, &ring.vertices, true, stroke);
            if let Some((from, to)) = ring.connector {
                painter.line_segment([from, to], stroke);
            }
        } else {
            // size + 1 vertices: the attachment node plus one per carbon
            let vertices = zigzag_vertices(attachment.pos, attachment.dir, chain.size() + 1);
            draw_polyline(painter, &vertices, false, stroke);
        }
    }

    draw_bond_lines(canvas, painter);
}

// Extra parallel lines for double/triple bonds. The side alternates
// with segment parity so consecutive bonds do not collide; a triple
// bond mirrors its second line to the opposite side.
fn draw_bond_lines(canvas: &Canvas, painter: &Painter) {
    let stroke = Stroke::new(theme::BOND_WIDTH, theme::CHAIN);
    let nodes = canvas.main_nodes();

    for bond in canvas.bonds() {
        let (Some(a), Some(b)) = (nodes.get(bond.index), nodes.get(bond.index + 1)) else {
            continue;
        };
        let flip = if bond.index % 2 == 0 { 1.0 } else { -1.0 };
        let offset = flip * theme::BOND_OFFSET;

        painter.line_segment(
            [
                Pos2::new(a.pos.x, a.pos.y + offset),
                Pos2::new(b.pos.x, b.pos.y + offset),
            ],
            stroke,
        );

        if bond.order == 3 {
            painter.line_segment(
                [
                    Pos2::new(a.pos.x, a.pos.y - offset),
                    Pos2::new(b.pos.x, b.pos.y - offset),
                ],
                stroke,
            );
        }
    }
}

fn draw_ghost(canvas: &Canvas, painter: &Painter) {
    let mouse = canvas.mouse();
    match canvas.action() {
        ActionType::Clear => {
            painter.circle_filled(mouse, NODE_RADIUS, theme::GHOST_GREY);
        }
        ActionType::Main => match canvas.main_step() {
            MainStep::Idle | MainStep::Committed => {}
            MainStep::EnterSize => {
                painter.circle_filled(mouse, NODE_RADIUS, theme::GHOST_BLUE);
            }
            MainStep::ChooseCyclo => {
                // Cyclo not decided yet; preview the open shape.
                let vertices = zigzag_vertices(
                    mouse,
                    DrawDirection::Right,
                    canvas.compound().main().size(),
                );
                draw_polyline(painter, &vertices, false, chain_stroke(theme::GHOST_GREY));
            }
            MainStep::ChooseLocation => {
                draw_main_preview(canvas, painter, mouse, theme::GHOST_GREY);
            }
        },
        ActionType::Side => match canvas.side_step() {
            SideStep::Idle | SideStep::Committed => {}
            SideStep::EnterSize => {
                painter.circle_filled(mouse, NODE_RADIUS, theme::GHOST_YELLOW);
            }
            SideStep::ChooseCyclo => {
                let size = canvas
                    .compound()
                    .sides()
                    .last()
                    .map(|c| c.size())
                    .unwrap_or(1);
                let vertices = zigzag_vertices(mouse, DrawDirection::Right, size + 1);
                draw_polyline(painter, &vertices, false, chain_stroke(theme::GHOST_GREY));
            }
            SideStep::ChooseLocation => {
                draw_side_preview(canvas, painter, mouse);
                highlight_nodes(painter, canvas.attachable_nodes());
            }
        },
        ActionType::Bond => match canvas.bond_step() {
            BondStep::Idle | BondStep::Committed => {}
            BondStep::EnterOrder => {
                painter.circle_filled(mouse, NODE_RADIUS, theme::GHOST_RED);
            }
            BondStep::ChooseLocation => {
                highlight_nodes(painter, canvas.bondable_nodes());
            }
        },
    }
}

fn draw_main_preview(canvas: &Canvas, painter: &Painter, at: Pos2, color: Color32) {
    let chain = canvas.compound().main();
    let stroke = chain_stroke(color);
    if chain.is_cyclo() {
        let ring = ring_vertices(at, chain.size(), None);
        draw_polyline(painter, &ring.vertices, true, stroke);
    } else {
        let vertices = zigzag_vertices(at, DrawDirection::Right, chain.size());
        draw_polyline(painter, &vertices, false, stroke);
    }
}

fn draw_side_preview(canvas: &Canvas, painter: &Painter, at: Pos2) {
    let Some(chain) = canvas.compound().sides().last() else {
        return;
    };
    let stroke = chain_stroke(theme::GHOST_GREY);
    if chain.is_cyclo() {
        let ring = ring_vertices(at, chain.size(), Some(canvas.ghost_dir()));
        draw_polyline(painter, &ring.vertices, true, stroke);
        if let Some((from, to)) = ring.connector {
            painter.line_segment([from, to], stroke);
        }
    } else {
        let vertices = zigzag_vertices(at, canvas.ghost_dir(), chain.size() + 1);
        draw_polyline(painter, &vertices, false, stroke);
    }
}

fn highlight_nodes(painter: &Painter, nodes: &[geometry::Node]) {
    for node in nodes {
        painter.circle_filled(node.pos, node.radius, theme::NODE_HIGHLIGHT);
    }
}
