use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canvas::{BondSegment, Canvas, SideAttachment};
use crate::compound::Compound;
use crate::geometry::Node;

/// Errors from saving or loading sketch snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to serialize sketch: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to read or write sketch file: {0}")]
    Io(#[from] std::io::Error),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AttachmentData {
    pos: [f32; 2],
    locant: usize,
    dir: crate::geometry::DrawDirection,
}

/// A serializable picture of everything committed to the canvas:
/// the compound model, the committed main-chain node positions, side
/// attachment points, and bond segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchSnapshot {
    /// Application version that wrote the snapshot.
    pub version: String,
    compound: Compound,
    main_nodes: Vec<[f32; 2]>,
    attachments: Vec<AttachmentData>,
    bonds: Vec<BondSegment>,
}

impl SketchSnapshot {
    pub(crate) fn capture(canvas: &Canvas) -> Self {
        // A side chain mid-flow (size entered, not yet placed) has no
        // attachment; keeping it would desync the side lists on restore.
        let mut compound = canvas.compound().clone();
        compound.retain_placed_sides();
        Self {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            compound,
            main_nodes: canvas
                .main_nodes()
                .iter()
                .map(|n| [n.pos.x, n.pos.y])
                .collect(),
            attachments: canvas
                .side_attachments()
                .iter()
                .map(|a| AttachmentData {
                    pos: [a.pos.x, a.pos.y],
                    locant: a.locant,
                    dir: a.dir,
                })
                .collect(),
            bonds: canvas.bonds().to_vec(),
        }
    }

    pub(crate) fn apply(&self, canvas: &mut Canvas) {
        if self.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "sketch snapshot from version {} loaded into {}",
                self.version,
                env!("CARGO_PKG_VERSION")
            );
        }

        let nodes = self
            .main_nodes
            .iter()
            .enumerate()
            .map(|(i, p)| Node::new(egui::pos2(p[0], p[1]), i + 1))
            .collect();
        // Guard against snapshots written before unplaced sides were
        // pruned at capture time.
        let mut compound = self.compound.clone();
        compound.retain_placed_sides();
        canvas.restore_main(compound, nodes);

        for a in &self.attachments {
            canvas.restore_side_attachment(SideAttachment {
                pos: egui::pos2(a.pos[0], a.pos[1]),
                locant: a.locant,
                dir: a.dir,
            });
        }
        canvas.restore_bonds(self.bonds.clone());
    }

    pub fn to_json(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save_to(&self, path: &Path) -> SnapshotResult<()> {
        fs::write(path, self.to_json()?)?;
        log::info!("sketch saved to {}", path.display());
        Ok(())
    }

    pub fn load_from(path: &Path) -> SnapshotResult<Self> {
        let json = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&json)?;
        log::info!("sketch loaded from {}", path.display());
        Ok(snapshot)
    }
}
