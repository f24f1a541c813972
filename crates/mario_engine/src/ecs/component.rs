//! Component kinds and typed access
//!
//! Component kinds form a closed set. Each kind has a [`ComponentKind`]
//! variant, a bit in [`ComponentMask`] and a dense storage slot in
//! [`ComponentStore`]. The [`Component`] trait maps a Rust type to its
//! storage statically, so typed access never goes through dynamic dispatch.

use super::components::{
    Animation, BoundingBox, BoundingConvex, Gravity, Input, Jump, LifeSpan, Sound, State, Transform,
};
use super::entity::EntityKey;
use super::storage::ComponentStorage;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Set of component kinds
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComponentMask: u16 {
        /// [`Transform`]
        const TRANSFORM = 1 << 0;
        /// [`BoundingBox`]
        const BOUNDING_BOX = 1 << 1;
        /// [`BoundingConvex`]
        const BOUNDING_CONVEX = 1 << 2;
        /// [`Gravity`]
        const GRAVITY = 1 << 3;
        /// [`Input`]
        const INPUT = 1 << 4;
        /// [`Jump`]
        const JUMP = 1 << 5;
        /// [`LifeSpan`]
        const LIFESPAN = 1 << 6;
        /// [`Animation`]
        const ANIMATION = 1 << 7;
        /// [`Sound`]
        const SOUND = 1 << 8;
        /// [`State`]
        const STATE = 1 << 9;
    }
}

/// Component kind identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum ComponentKind {
    /// Position, velocity, scale, angle
    Transform,
    /// Axis-aligned collision box
    BoundingBox,
    /// Convex collision polygon
    BoundingConvex,
    /// Downward acceleration
    Gravity,
    /// Input intent flags
    Input,
    /// Jump impulse state
    Jump,
    /// Frame-based lifetime
    LifeSpan,
    /// Animation playback
    Animation,
    /// Sound playback request
    Sound,
    /// Named state
    State,
}

impl ComponentKind {
    /// Every kind, in mask bit order
    pub const ALL: [Self; 10] = [
        Self::Transform,
        Self::BoundingBox,
        Self::BoundingConvex,
        Self::Gravity,
        Self::Input,
        Self::Jump,
        Self::LifeSpan,
        Self::Animation,
        Self::Sound,
        Self::State,
    ];

    /// The mask bit of this kind
    pub const fn mask(self) -> ComponentMask {
        match self {
            Self::Transform => ComponentMask::TRANSFORM,
            Self::BoundingBox => ComponentMask::BOUNDING_BOX,
            Self::BoundingConvex => ComponentMask::BOUNDING_CONVEX,
            Self::Gravity => ComponentMask::GRAVITY,
            Self::Input => ComponentMask::INPUT,
            Self::Jump => ComponentMask::JUMP,
            Self::LifeSpan => ComponentMask::LIFESPAN,
            Self::Animation => ComponentMask::ANIMATION,
            Self::Sound => ComponentMask::SOUND,
            Self::State => ComponentMask::STATE,
        }
    }

    /// Kinds contained in `mask`
    pub fn from_mask(mask: ComponentMask) -> Vec<Self> {
        Self::ALL.into_iter().filter(|kind| mask.contains(kind.mask())).collect()
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A component type with a dedicated storage slot
pub trait Component: Sized + 'static {
    /// Kind identifier
    const KIND: ComponentKind;

    /// This kind's storage
    fn storage(store: &ComponentStore) -> &ComponentStorage<Self>;

    /// This kind's storage, mutably
    fn storage_mut(store: &mut ComponentStore) -> &mut ComponentStorage<Self>;
}

/// One or more component types required together by a query
///
/// Implemented for every component type and for tuples of up to four.
pub trait ComponentSet {
    /// Mask of the required kinds
    fn mask() -> ComponentMask;
}

macro_rules! component_store {
    ($($field:ident: $ty:ty => $kind:ident),* $(,)?) => {
        /// Per-kind component storage, one dense container per kind
        #[derive(Default)]
        pub struct ComponentStore {
            $($field: ComponentStorage<$ty>,)*
        }

        impl ComponentStore {
            /// Drop every component attached to `key`
            pub(super) fn remove_all(&mut self, key: EntityKey) {
                $(self.$field.remove(key);)*
            }
        }

        $(
            impl Component for $ty {
                const KIND: ComponentKind = ComponentKind::$kind;

                fn storage(store: &ComponentStore) -> &ComponentStorage<Self> {
                    &store.$field
                }

                fn storage_mut(store: &mut ComponentStore) -> &mut ComponentStorage<Self> {
                    &mut store.$field
                }
            }

            impl ComponentSet for $ty {
                fn mask() -> ComponentMask {
                    ComponentKind::$kind.mask()
                }
            }
        )*
    };
}

component_store! {
    transforms: Transform => Transform,
    bounding_boxes: BoundingBox => BoundingBox,
    bounding_convexes: BoundingConvex => BoundingConvex,
    gravities: Gravity => Gravity,
    inputs: Input => Input,
    jumps: Jump => Jump,
    lifespans: LifeSpan => LifeSpan,
    animations: Animation => Animation,
    sounds: Sound => Sound,
    states: State => State,
}

macro_rules! tuple_component_set {
    ($($name:ident),+) => {
        impl<$($name: Component),+> ComponentSet for ($($name,)+) {
            fn mask() -> ComponentMask {
                ComponentMask::empty() $(| $name::KIND.mask())+
            }
        }
    };
}

tuple_component_set!(A);
tuple_component_set!(A, B);
tuple_component_set!(A, B, C);
tuple_component_set!(A, B, C, D);
