//! Type-erased per-node behaviours
//!
//! Any type implementing [`Script`] can be attached to a scene node. The
//! scene stores every behaviour as an [`AnyScript`], so nodes hold
//! heterogeneous scripts without sharing a base type.

use std::any::Any;
use std::fmt;

use crate::foundation::collections::NodeId;
use crate::render::VisualServer;

/// Capabilities every per-node behaviour provides
pub trait Script: 'static {
    /// Advance internal state by `delta` seconds
    fn process(&mut self, delta: f32);

    /// Submit geometry for the current frame
    fn draw(&self, server: &mut dyn VisualServer);

    /// Record the node hosting this script
    fn set_owner(&mut self, owner: NodeId);
}

/// Object-safe extension giving access to the concrete type
trait ErasedScript: Script {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Script> ErasedScript for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Owning, move-only handle to a script of any concrete type
///
/// Moving an `AnyScript` moves ownership of the wrapped behaviour; the
/// behaviour itself stays where it was allocated. There is no way to
/// duplicate one:
///
/// ```compile_fail
/// use raster_engine::scene::{AnyScript, Script};
/// use raster_engine::foundation::collections::NodeId;
/// use raster_engine::render::VisualServer;
///
/// struct Idle;
///
/// impl Script for Idle {
///     fn process(&mut self, _delta: f32) {}
///     fn draw(&self, _server: &mut dyn VisualServer) {}
///     fn set_owner(&mut self, _owner: NodeId) {}
/// }
///
/// let script = AnyScript::new(Idle);
/// let copy = script.clone();
/// ```
pub struct AnyScript {
    inner: Box<dyn ErasedScript>,
}

impl AnyScript {
    /// Wrap a concrete script
    pub fn new<T: Script>(script: T) -> Self {
        Self {
            inner: Box::new(script),
        }
    }

    /// Forward to [`Script::process`]
    pub fn process(&mut self, delta: f32) {
        self.inner.process(delta);
    }

    /// Forward to [`Script::draw`]
    pub fn draw(&self, server: &mut dyn VisualServer) {
        self.inner.draw(server);
    }

    /// Forward to [`Script::set_owner`]
    pub fn set_owner(&mut self, owner: NodeId) {
        self.inner.set_owner(owner);
    }

    /// Whether the wrapped script is a `T`
    pub fn is<T: Script>(&self) -> bool {
        self.inner.as_any().is::<T>()
    }

    /// Borrow the wrapped script as a `T`
    pub fn downcast_ref<T: Script>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the wrapped script as a `T`
    pub fn downcast_mut<T: Script>(&mut self) -> Option<&mut T> {
        self.inner.as_any_mut().downcast_mut::<T>()
    }

    /// Name of the wrapped concrete type
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }
}

impl<T: Script> From<T> for AnyScript {
    fn from(script: T) -> Self {
        Self::new(script)
    }
}

impl fmt::Debug for AnyScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyScript")
            .field("type", &self.type_name())
            .finish()
    }
}
