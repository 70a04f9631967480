//! Locations are bounded boxes that keep track of the objects placed inside them.

use crate::game::objects::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a location inside a [`crate::game::World`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub usize);

/// The fixed dimensions of a location. Objects keep a copy of the extent of their location to
/// clamp coordinate writes without having to look the location up.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
    pub length: i32,
}

impl Extent {
    pub const fn new(width: i32, height: i32, length: i32) -> Self {
        Extent {
            width,
            height,
            length,
        }
    }

    /// Clamp an x coordinate into `[0, length]`.
    pub const fn clamp_x(&self, x: i32) -> i32 {
        clamp_axis(x, self.length)
    }

    /// Clamp a y coordinate into `[0, width]`.
    pub const fn clamp_y(&self, y: i32) -> i32 {
        clamp_axis(y, self.width)
    }

    /// Clamp a z coordinate into `[0, height]`.
    pub const fn clamp_z(&self, z: i32) -> i32 {
        clamp_axis(z, self.height)
    }
}

const fn clamp_axis(value: i32, dimension: i32) -> i32 {
    if value < 0 {
        0
    } else if value > dimension {
        dimension
    } else {
        value
    }
}

/// A named box of `width` x `height` x `length`. The location only tracks which objects are
/// present, it does not own them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Location {
    id: LocationId,
    pub name: String,
    extent: Extent,
    objects: Vec<ObjectId>,
}

impl Location {
    pub fn new(id: LocationId, name: &str, width: i32, height: i32, length: i32) -> Self {
        Location {
            id,
            name: name.into(),
            extent: Extent::new(width, height, length),
            objects: Vec::new(),
        }
    }

    pub const fn id(&self) -> LocationId {
        self.id
    }

    pub const fn extent(&self) -> Extent {
        self.extent
    }

    pub const fn width(&self) -> i32 {
        self.extent.width
    }

    pub const fn height(&self) -> i32 {
        self.extent.height
    }

    pub const fn length(&self) -> i32 {
        self.extent.length
    }

    /// Computed in 128 bits, the product of any three `i32` dimensions fits.
    pub fn volume(&self) -> i128 {
        i128::from(self.extent.width)
            * i128::from(self.extent.height)
            * i128::from(self.extent.length)
    }

    /// Register an object as present. Returns `false` if it was already registered.
    pub fn add_object(&mut self, id: ObjectId) -> bool {
        if self.objects.contains(&id) {
            return false;
        }
        trace!("{} now contains object {}", self.name, id);
        self.objects.push(id);
        true
    }

    /// Forget about all objects in this location.
    pub fn clear(&mut self) {
        debug!("clearing {} object(s) from {}", self.objects.len(), self.name);
        self.objects.clear();
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains(&id)
    }

    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    /// Check whether the coordinate lies strictly inside the location.
    ///
    /// Both ends are exclusive, so an object clamped onto a wall (coordinate `0` or equal to the
    /// dimension) is reported as outside.
    pub const fn is_inside(&self, x: i32, y: i32, z: i32) -> bool {
        (x > 0 && x < self.extent.length)
            && (y > 0 && y < self.extent.width)
            && (z > 0 && z < self.extent.height)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}x{}x{}] with {} object(s)",
            self.name,
            self.extent.width,
            self.extent.height,
            self.extent.length,
            self.objects.len()
        )
    }
}
