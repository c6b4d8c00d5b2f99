/// Frame buffer layout shared with the page.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 22 floats]       FrameSnapshot
/// [Solids: max_solids × 5]  x, y, w, h, kind
/// [Events: max_events × 4]  kind, a, b, c
/// ```
///
/// Capacities are fixed per level load. The page reads the counts from the
/// header and the offsets from the exported layout.
use bytemuck::{Pod, Zeroable};

use crate::api::types::{GameEvent, PlayEvent};
use crate::core::geometry::Solid;
use crate::level::geometry::LevelGeometry;
use crate::sim::step::PlayState;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = FrameSnapshot::FLOATS;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_TICK: usize = 1;
pub const HEADER_X: usize = 2;
pub const HEADER_Y: usize = 3;
pub const HEADER_WIDTH: usize = 4;
pub const HEADER_HEIGHT: usize = 5;
pub const HEADER_VX: usize = 6;
pub const HEADER_VY: usize = 7;
pub const HEADER_GROUNDED: usize = 8;
pub const HEADER_CHECKPOINT_INDEX: usize = 9;
pub const HEADER_CHECKPOINT_COUNT: usize = 10;
pub const HEADER_PROGRESS: usize = 11;
pub const HEADER_METERS: usize = 12;
pub const HEADER_CAM_X: usize = 13;
pub const HEADER_WON: usize = 14;
pub const HEADER_WORLD_WIDTH: usize = 15;
pub const HEADER_WORLD_HEIGHT: usize = 16;
pub const HEADER_GROUND_Y: usize = 17;
pub const HEADER_VIEWPORT_WIDTH: usize = 18;
pub const HEADER_RESPAWNS: usize = 19;
pub const HEADER_SOLID_COUNT: usize = 20;
pub const HEADER_EVENT_COUNT: usize = 21;

/// Floats per solid: x, y, w, h, kind (wire format, never changes).
pub const SOLID_FLOATS: usize = 5;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Default cap on events reported per frame.
pub const DEFAULT_MAX_EVENTS: usize = 16;

/// Everything the page needs to draw one frame and its HUD.
/// Field order is the header order above.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FrameSnapshot {
    pub protocol_version: f32,
    pub tick: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: f32,
    pub checkpoint_index: f32,
    pub checkpoint_count: f32,
    pub progress: f32,
    pub meters: f32,
    pub cam_x: f32,
    pub won: f32,
    pub world_width: f32,
    pub world_height: f32,
    pub ground_y: f32,
    pub viewport_width: f32,
    pub respawns: f32,
    pub solid_count: f32,
    pub event_count: f32,
}

impl FrameSnapshot {
    pub const FLOATS: usize = std::mem::size_of::<Self>() / 4;

    /// Read the play state into wire form. Counts are filled by [`write_frame`].
    pub fn capture(state: &PlayState, level: &LevelGeometry, tick: u64) -> Self {
        let body = &state.body;
        Self {
            protocol_version: PROTOCOL_VERSION,
            tick: tick as f32,
            x: body.pos.x,
            y: body.pos.y,
            width: body.size.x,
            height: body.size.y,
            vx: body.vel.x,
            vy: body.vel.y,
            grounded: flag(body.grounded),
            checkpoint_index: state.checkpoint_index() as f32,
            checkpoint_count: level.checkpoints.len() as f32,
            progress: level.progress(body.pos.x),
            meters: LevelGeometry::meters(body.pos.x) as f32,
            cam_x: state.cam_x(),
            won: flag(state.is_won()),
            world_width: level.world.width,
            world_height: level.world.height,
            ground_y: level.world.ground_y,
            viewport_width: level.viewport.width,
            respawns: state.respawns as f32,
            solid_count: 0.0,
            event_count: 0.0,
        }
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

fn flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum solids the buffer can hold.
    pub max_solids: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of solid data section in floats.
    pub solid_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where solid data begins.
    pub solid_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_solids: usize, max_events: usize) -> Self {
        let solid_data_floats = max_solids * SOLID_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let solid_data_offset = HEADER_FLOATS;
        let event_data_offset = solid_data_offset + solid_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_solids,
            max_events,
            solid_data_floats,
            event_data_floats,
            solid_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Layout sized to hold every solid of `level`.
    pub fn for_level(level: &LevelGeometry) -> Self {
        Self::new(level.solids.len(), DEFAULT_MAX_EVENTS)
    }
}

/// Write one frame into `buffer`, which must be `layout.buffer_total_floats` long.
///
/// Solids and events beyond capacity are dropped; the header counts reflect
/// what was actually written.
pub fn write_frame(
    buffer: &mut [f32],
    layout: &ProtocolLayout,
    snapshot: &FrameSnapshot,
    solids: &[Solid],
    events: &[PlayEvent],
) {
    if buffer.len() < layout.buffer_total_floats {
        log::error!(
            "frame buffer holds {} floats, layout needs {}",
            buffer.len(),
            layout.buffer_total_floats
        );
        return;
    }

    let solid_count = solids.len().min(layout.max_solids);
    let event_count = events.len().min(layout.max_events);
    if events.len() > event_count {
        log::warn!("dropping {} events over capacity", events.len() - event_count);
    }

    let mut header = *snapshot;
    header.solid_count = solid_count as f32;
    header.event_count = event_count as f32;
    buffer[..HEADER_FLOATS].copy_from_slice(header.as_floats());

    let solid_section =
        &mut buffer[layout.solid_data_offset..layout.solid_data_offset + layout.solid_data_floats];
    for (slot, solid) in solid_section.chunks_exact_mut(SOLID_FLOATS).zip(solids) {
        let r = &solid.rect;
        slot.copy_from_slice(&[r.x, r.y, r.w, r.h, solid.kind.as_f32()]);
    }

    let event_section =
        &mut buffer[layout.event_data_offset..layout.event_data_offset + layout.event_data_floats];
    for (slot, event) in event_section.chunks_exact_mut(EVENT_FLOATS).zip(events) {
        let wire = event.to_wire();
        slot.copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(&wire)));
    }
}
