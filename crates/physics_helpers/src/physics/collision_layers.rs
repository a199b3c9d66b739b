//! Collision layer masks for filtering overlap and raycast queries
//!
//! Every collider sits on exactly one layer bit. Queries take a mask and
//! only see colliders whose layer bit is set in it.

/// Collision layer definitions as bit masks
pub struct CollisionLayers;

impl CollisionLayers {
    /// No collision layer
    pub const NONE: u32 = 0;

    /// All collision layers
    pub const ALL: u32 = 0xFFFF_FFFF;

    /// Layer for colliders that were not assigned one
    pub const DEFAULT: u32 = 1 << 0;

    /// Colliders on this layer are skipped by the default raycast mask
    pub const IGNORE_RAYCAST: u32 = 1 << 1;

    /// Player character layer
    pub const PLAYER: u32 = 1 << 2;

    /// Enemy character layer
    pub const ENEMY: u32 = 1 << 3;

    /// Projectiles (bullets, missiles, etc.)
    pub const PROJECTILE: u32 = 1 << 4;

    /// Static environment geometry
    pub const ENVIRONMENT: u32 = 1 << 5;

    /// Trigger volumes
    pub const TRIGGER: u32 = 1 << 6;

    /// Pickups and collectibles
    pub const PICKUP: u32 = 1 << 7;

    /// Mask used by raycasts unless configured otherwise
    pub const DEFAULT_RAYCAST: u32 = Self::ALL & !Self::IGNORE_RAYCAST;

    /// Layer bit for a user-defined layer index (0..32)
    ///
    /// Indices past 31 map to [`Self::NONE`].
    pub const fn custom(index: u32) -> u32 {
        if index < u32::BITS {
            1 << index
        } else {
            Self::NONE
        }
    }

    /// Check whether `layer` is selected by `mask`
    pub const fn contains(mask: u32, layer: u32) -> bool {
        mask & layer != 0
    }

    /// Helper to create a mask from multiple layers
    ///
    /// # Example
    /// ```
    /// use physics_helpers::physics::CollisionLayers;
    ///
    /// let mask = CollisionLayers::mask(&[
    ///     CollisionLayers::PLAYER,
    ///     CollisionLayers::ENEMY,
    /// ]);
    /// assert!(CollisionLayers::contains(mask, CollisionLayers::ENEMY));
    /// assert!(!CollisionLayers::contains(mask, CollisionLayers::PICKUP));
    /// ```
    pub fn mask(layers: &[u32]) -> u32 {
        layers.iter().fold(Self::NONE, |acc, &layer| acc | layer)
    }
}
