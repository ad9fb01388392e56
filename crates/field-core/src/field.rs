use glam::Vec2;
use rand::Rng;

use crate::connections::{Connection, ConnectionPool};
use crate::constants::{PULSE_STAGGER, SCENE_ROTATION_STEP};
use crate::node::Node;
use crate::tier::FieldConfig;

/// What a single [`ParticleField::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub frame: u64,
    pub nodes_updated: bool,
    pub connections_recomputed: bool,
}

/// The node set plus its connection pool, advanced one display frame at a time.
pub struct ParticleField {
    config: FieldConfig,
    nodes: Vec<Node>,
    pool: ConnectionPool,
    frame: u64,
    last_connection_update: Option<f64>,
    scene_rotation: f32,
}

impl ParticleField {
    pub fn new(config: FieldConfig, rng: &mut impl Rng) -> Self {
        let nodes = (0..config.settings.node_count)
            .map(|_| Node::random(rng))
            .collect();
        Self::from_nodes(config, nodes)
    }

    /// Build a field around caller-supplied nodes (runs the initial connection pass).
    pub fn from_nodes(config: FieldConfig, nodes: Vec<Node>) -> Self {
        let mut field = Self {
            config,
            nodes,
            pool: ConnectionPool::new(config.pool_size),
            frame: 0,
            last_connection_update: None,
            scene_rotation: 0.0,
        };
        field
            .pool
            .recompute(&field.nodes, field.config.settings.connection_distance);
        field
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn visible_connections(&self) -> &[Connection] {
        self.pool.visible()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Accumulated drift of the whole scene around the y axis.
    pub fn scene_rotation(&self) -> f32 {
        self.scene_rotation
    }

    #[inline]
    fn is_skipped_frame(&self) -> bool {
        self.config.skip_alternate_frames && self.frame % 2 == 0
    }

    /// Advance one display frame. Node transforms are updated before the
    /// (throttled) connection recompute is considered.
    pub fn tick(&mut self, time_sec: f64, pointer: Vec2) -> TickReport {
        self.frame += 1;
        let nodes_updated = !self.is_skipped_frame();
        if nodes_updated {
            let pulse_slot = self.frame % PULSE_STAGGER;
            for (i, node) in self.nodes.iter_mut().enumerate() {
                node.approach(pointer);
                if i as u64 % PULSE_STAGGER == pulse_slot {
                    node.scale = node.pulse_scale(time_sec);
                }
                node.spin();
            }
        }

        let interval = self.config.settings.connection_interval.as_secs_f64();
        let due = self
            .last_connection_update
            .map_or(true, |last| time_sec - last > interval);
        if due {
            self.recompute_connections();
            self.last_connection_update = Some(time_sec);
        }

        self.scene_rotation += SCENE_ROTATION_STEP;

        TickReport {
            frame: self.frame,
            nodes_updated,
            connections_recomputed: due,
        }
    }

    pub fn recompute_connections(&mut self) -> usize {
        self.pool
            .recompute(&self.nodes, self.config.settings.connection_distance)
    }
}
