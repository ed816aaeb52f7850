/// OutputManager — render-target binding transitions.
///
/// Owns the GPU-side attachment sets (camera output, forward, G-Buffer,
/// deferred, resolve targets) and transitions between them. Paired
/// begin/end calls must nest strictly within one camera's frame:
/// `BindScope` turns that pairing into an RAII guard so the matching
/// end fires even on an early error return.

/// Attachment scope kinds with paired begin/end transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindScopeKind {
    /// A camera's render-target set, outermost scope per camera
    Output,
    /// Forward/primary attachment
    Forward,
    /// G-Buffer attachments
    GBuffer,
    /// Deferred shading target
    Deferred,
    /// Anti-aliasing resolve target
    Resolve,
}

/// Render-target binding transitions, implemented by the backend.
///
/// Begin/end pairs for `BindScopeKind` scopes plus the unpaired
/// transitions used by post-processing.
pub trait OutputManager {
    /// Transition into an attachment scope.
    fn bind_begin(&mut self, scope: BindScopeKind);

    /// Transition out of an attachment scope.
    fn bind_end(&mut self, scope: BindScopeKind);

    /// Swap the ping-pong attachment pair inside a resolve or
    /// post-processing chain.
    fn bind_ping_pong(&mut self);

    /// Transition into the post-processing chain (no paired end; the
    /// enclosing scope's end closes it).
    fn bind_begin_post_processing(&mut self);

    /// Bind the full-display viewport target (sprite overlay, no-op
    /// fallback).
    fn bind_display_viewport(&mut self);
}

/// RAII guard for a begin/end attachment scope pair.
///
/// Opening fires `bind_begin`; dropping fires the matching `bind_end`.
/// Inner scopes are opened through [`BindScope::nest`], which borrows
/// the guard mutably — the borrow checker rejects interleaved scopes.
pub struct BindScope<'a> {
    output: &'a mut dyn OutputManager,
    kind: BindScopeKind,
}

impl<'a> BindScope<'a> {
    /// Open a scope: fires `bind_begin(kind)` immediately.
    pub fn open(output: &'a mut dyn OutputManager, kind: BindScopeKind) -> Self {
        output.bind_begin(kind);
        Self { output, kind }
    }

    /// Open a nested scope inside this one.
    pub fn nest(&mut self, kind: BindScopeKind) -> BindScope<'_> {
        BindScope::open(&mut *self.output, kind)
    }

    /// Access the output manager for unpaired transitions (ping-pong,
    /// post-processing) while the scope is held open.
    pub fn output(&mut self) -> &mut dyn OutputManager {
        self.output
    }

    /// The kind this scope was opened with.
    pub fn kind(&self) -> BindScopeKind {
        self.kind
    }
}

impl Drop for BindScope<'_> {
    fn drop(&mut self) {
        self.output.bind_end(self.kind);
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
