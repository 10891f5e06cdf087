pub mod render;
pub mod theme;

use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::compound::{Chain, Compound};
use crate::error::InputError;
use crate::geometry::{DrawDirection, Node, ring_vertices, zigzag_vertices};
use crate::palette::ActionType;
use crate::persistence::SketchSnapshot;

pub const MIN_MAIN_SIZE: usize = 2;
pub const MIN_SIDE_SIZE: usize = 1;
pub const MAX_CHAIN_SIZE: usize = 10;

/// Steps of the main-chain flow. Only `select_action` and successful
/// input/click handling move between them; Clear goes back to Idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MainStep {
    #[default]
    Idle,
    EnterSize,
    ChooseCyclo,
    ChooseLocation,
    Committed,
}

/// Steps of the side-chain flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SideStep {
    #[default]
    Idle,
    EnterSize,
    ChooseCyclo,
    ChooseLocation,
    Committed,
}

/// Steps of the multiple-bond flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BondStep {
    #[default]
    Idle,
    EnterOrder,
    ChooseLocation,
    Committed,
}

/// A committed multiple bond on the main chain: the segment from node
/// `index` to `index + 1` carries `order` bond lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondSegment {
    pub index: usize,
    pub order: u8,
}

/// Where a committed side chain hangs off the main chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideAttachment {
    pub pos: Pos2,
    pub locant: usize,
    pub dir: DrawDirection,
}

/// The drawing surface state: per-feature step machines plus everything
/// committed so far. The committed main-chain node list is the single
/// source of truth for side attachment and bond placement.
pub struct Canvas {
    action: ActionType,
    mouse: Pos2,
    main_step: MainStep,
    side_step: SideStep,
    bond_step: BondStep,
    compound: Compound,
    main_nodes: Vec<Node>,
    side_attachments: Vec<SideAttachment>,
    bonds: Vec<BondSegment>,
    pending_bond_order: Option<u8>,
    ghost_dir: DrawDirection,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            action: ActionType::Clear,
            mouse: Pos2::ZERO,
            main_step: MainStep::Idle,
            side_step: SideStep::Idle,
            bond_step: BondStep::Idle,
            compound: Compound::new(),
            main_nodes: Vec::new(),
            side_attachments: Vec::new(),
            bonds: Vec::new(),
            pending_bond_order: None,
            ghost_dir: DrawDirection::UpRight,
        }
    }

    pub fn action(&self) -> ActionType {
        self.action
    }

    pub fn main_step(&self) -> MainStep {
        self.main_step
    }

    pub fn side_step(&self) -> SideStep {
        self.side_step
    }

    pub fn bond_step(&self) -> BondStep {
        self.bond_step
    }

    pub fn compound(&self) -> &Compound {
        &self.compound
    }

    pub fn main_nodes(&self) -> &[Node] {
        &self.main_nodes
    }

    pub fn side_attachments(&self) -> &[SideAttachment] {
        &self.side_attachments
    }

    pub fn bonds(&self) -> &[BondSegment] {
        &self.bonds
    }

    pub fn ghost_dir(&self) -> DrawDirection {
        self.ghost_dir
    }

    pub fn mouse(&self) -> Pos2 {
        self.mouse
    }

    pub fn main_committed(&self) -> bool {
        self.main_step == MainStep::Committed
    }

    /// Start the flow for `action`. Side and bond flows refuse to start
    /// without a committed main chain (bonds additionally need an open
    /// chain). A half-built side chain is abandoned when switching away.
    pub fn select_action(&mut self, action: ActionType) -> Result<(), InputError> {
        self.abandon_unplaced_side();
        self.pending_bond_order = None;

        match action {
            ActionType::Clear => self.reset(),
            ActionType::Main => self.main_step = MainStep::EnterSize,
            ActionType::Side => {
                if !self.main_committed() {
                    return Err(InputError::NoMainChain);
                }
                self.side_step = SideStep::EnterSize;
            }
            ActionType::Bond => {
                if !self.main_committed() {
                    return Err(InputError::NoMainChain);
                }
                if self.compound.main().is_cyclo() {
                    return Err(InputError::CycloMainChain);
                }
                self.bond_step = BondStep::EnterOrder;
            }
        }

        log::info!("action selected: {:?}", action);
        self.action = action;
        Ok(())
    }

    /// Wipe everything back to an empty canvas.
    fn reset(&mut self) {
        log::info!("clearing canvas");
        self.main_step = MainStep::Idle;
        self.side_step = SideStep::Idle;
        self.bond_step = BondStep::Idle;
        self.compound = Compound::new();
        self.main_nodes.clear();
        self.side_attachments.clear();
        self.bonds.clear();
        self.pending_bond_order = None;
        self.ghost_dir = DrawDirection::UpRight;
    }

    // A side chain is pushed onto the compound when its size is entered;
    // drop it again if the flow is left before placement.
    fn abandon_unplaced_side(&mut self) {
        if matches!(self.side_step, SideStep::ChooseCyclo | SideStep::ChooseLocation) {
            self.compound.remove_last_side();
            self.side_step = SideStep::Idle;
        }
    }

    pub fn pointer_moved(&mut self, pos: Pos2) {
        self.mouse = pos;
    }

    /// Interpret the dialog field's contents for the selected action's
    /// current step: a number for sizes and bond orders, Y/N for cyclo.
    pub fn submit_entry(&mut self, text: &str) -> Result<(), InputError> {
        let entry = text.trim();
        match self.action {
            ActionType::Main => match self.main_step {
                MainStep::EnterSize => {
                    let size = parse_size(entry, MIN_MAIN_SIZE)?;
                    self.compound.main_mut().set_size(size);
                    self.main_step = MainStep::ChooseCyclo;
                    Ok(())
                }
                MainStep::ChooseCyclo => {
                    let cyclo = parse_yes_no(entry)?;
                    self.compound.main_mut().set_cyclo(cyclo);
                    self.main_step = MainStep::ChooseLocation;
                    log::debug!("main chain: size {}, cyclo {}", self.compound.main().size(), cyclo);
                    Ok(())
                }
                _ => Err(InputError::UnexpectedEntry),
            },
            ActionType::Side => match self.side_step {
                SideStep::EnterSize => {
                    let size = parse_size(entry, MIN_SIDE_SIZE)?;
                    self.compound.add_side(Chain::new(size));
                    self.side_step = SideStep::ChooseCyclo;
                    Ok(())
                }
                SideStep::ChooseCyclo => {
                    let cyclo = parse_yes_no(entry)?;
                    if let Some(side) = self.compound.last_side_mut() {
                        side.set_cyclo(cyclo);
                    }
                    self.side_step = SideStep::ChooseLocation;
                    Ok(())
                }
                _ => Err(InputError::UnexpectedEntry),
            },
            ActionType::Bond => match self.bond_step {
                BondStep::EnterOrder => {
                    let order: u8 = entry
                        .parse()
                        .map_err(|_| InputError::UnparseableEntry(entry.to_owned()))?;
                    if order != 2 && order != 3 {
                        return Err(InputError::InvalidBondOrder);
                    }
                    self.pending_bond_order = Some(order);
                    self.bond_step = BondStep::ChooseLocation;
                    Ok(())
                }
                _ => Err(InputError::UnexpectedEntry),
            },
            ActionType::Clear => Err(InputError::UnexpectedEntry),
        }
    }

    /// Handle a primary click on the canvas at `pos`.
    pub fn primary_click(&mut self, pos: Pos2) {
        match self.action {
            ActionType::Main if self.main_step == MainStep::ChooseLocation => {
                self.commit_main(pos);
            }
            ActionType::Side if self.side_step == SideStep::ChooseLocation => {
                self.commit_side(pos);
            }
            ActionType::Bond if self.bond_step == BondStep::ChooseLocation => {
                self.commit_bond(pos);
            }
            _ => {}
        }
    }

    /// Cycle the preview direction for side-chain placement.
    pub fn cycle_ghost_direction(&mut self) {
        self.ghost_dir = self.ghost_dir.cycle();
        log::debug!("ghost direction now {:?}", self.ghost_dir);
    }

    fn commit_main(&mut self, start: Pos2) {
        let chain = self.compound.main();
        let vertices = if chain.is_cyclo() {
            ring_vertices(start, chain.size(), None).vertices
        } else {
            zigzag_vertices(start, DrawDirection::Right, chain.size())
        };
        self.main_nodes = vertices
            .into_iter()
            .enumerate()
            .map(|(i, p)| Node::new(p, i + 1))
            .collect();
        self.main_step = MainStep::Committed;
        log::info!(
            "main chain committed: {} carbons, cyclo {}",
            chain.size(),
            chain.is_cyclo()
        );
    }

    fn commit_side(&mut self, pos: Pos2) {
        let Some(node) = self
            .attachable_nodes()
            .iter()
            .find(|n| n.contains(pos))
            .cloned()
        else {
            return;
        };
        if let Some(side) = self.compound.last_side_mut() {
            side.set_location(node.locant);
        }
        self.side_attachments.push(SideAttachment {
            pos: node.pos,
            locant: node.locant,
            dir: self.ghost_dir,
        });
        self.side_step = SideStep::Committed;
        log::info!("side chain committed at locant {}", node.locant);
    }

    fn commit_bond(&mut self, pos: Pos2) {
        let Some(order) = self.pending_bond_order else {
            return;
        };
        let Some(node) = self
            .bondable_nodes()
            .iter()
            .find(|n| n.contains(pos))
            .cloned()
        else {
            return;
        };
        self.bonds.push(BondSegment {
            index: node.locant - 1,
            order,
        });
        self.compound.record_bond_order(order);
        self.pending_bond_order = None;
        self.bond_step = BondStep::Committed;
        log::info!("bond of order {} committed at segment {}", order, node.locant - 1);
    }

    /// Main-chain nodes a side chain may attach to. The endpoints of an
    /// open chain are excluded (side chains there would just lengthen
    /// the chain); a ring offers all nodes but the closing vertex.
    pub fn attachable_nodes(&self) -> &[Node] {
        let len = self.main_nodes.len();
        if len < 2 {
            return &[];
        }
        if self.compound.main().is_cyclo() {
            &self.main_nodes[..len - 1]
        } else {
            &self.main_nodes[1..len - 1]
        }
    }

    /// Main-chain nodes that start a bondable segment (all but the last).
    pub fn bondable_nodes(&self) -> &[Node] {
        let len = self.main_nodes.len();
        if len < 2 {
            return &[];
        }
        &self.main_nodes[..len - 1]
    }

    /// The dialog prompt for the current action and step.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.action {
            ActionType::Clear => Some("Select a feature to add"),
            ActionType::Main => match self.main_step {
                MainStep::Idle | MainStep::Committed => None,
                MainStep::EnterSize => Some("Enter size of main chain: (ENTER)"),
                MainStep::ChooseCyclo => Some("Cyclo? (Y/N)"),
                MainStep::ChooseLocation => Some("Select location for main chain: (CLICK)"),
            },
            ActionType::Side => match self.side_step {
                SideStep::Idle | SideStep::Committed => None,
                SideStep::EnterSize => Some("Enter size of side chain: (ENTER)"),
                SideStep::ChooseCyclo => Some("Cyclo? (Y/N)"),
                SideStep::ChooseLocation => {
                    Some("Select node for the side chain: (CLICK, right-click turns)")
                }
            },
            ActionType::Bond => match self.bond_step {
                BondStep::Idle | BondStep::Committed => None,
                BondStep::EnterOrder => Some("Enter the bond order: (2 or 3)"),
                BondStep::ChooseLocation => Some("Select node for the bond: (CLICK)"),
            },
        }
    }

    /// Serializable picture of everything committed so far.
    pub fn snapshot(&self) -> SketchSnapshot {
        SketchSnapshot::capture(self)
    }

    /// Replace the canvas contents with a previously saved snapshot.
    pub fn restore(&mut self, snapshot: &SketchSnapshot) {
        self.reset();
        snapshot.apply(self);
    }

    // Restoration hooks for SketchSnapshot; not part of the interactive API.
    pub(crate) fn restore_main(&mut self, compound: Compound, nodes: Vec<Node>) {
        self.compound = compound;
        if !nodes.is_empty() {
            self.main_nodes = nodes;
            self.main_step = MainStep::Committed;
        }
    }

    pub(crate) fn restore_side_attachment(&mut self, attachment: SideAttachment) {
        self.side_attachments.push(attachment);
    }

    pub(crate) fn restore_bonds(&mut self, bonds: Vec<BondSegment>) {
        self.bonds = bonds;
    }
}

fn parse_size(entry: &str, min: usize) -> Result<usize, InputError> {
    let size: usize = entry
        .parse()
        .map_err(|_| InputError::UnparseableEntry(entry.to_owned()))?;
    if size < min {
        Err(InputError::SizeTooSmall)
    } else if size > MAX_CHAIN_SIZE {
        Err(InputError::SizeTooBig)
    } else {
        Ok(size)
    }
}

fn parse_yes_no(entry: &str) -> Result<bool, InputError> {
    if entry.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if entry.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(InputError::UnparseableEntry(entry.to_owned()))
    }
}
