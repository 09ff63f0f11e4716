use crate::util::aliases::DepsMutC;

/// Allows dynamic delegation of a held [DepsMutC](crate::util::aliases::DepsMutC) so that services
/// can share storage access without being declared mutable.
pub trait DepsManager {
    /// Functionally retrieves the result of a usage of the held deps.
    ///
    /// # Parameters
    ///
    /// * `deps_fn` A closure that receives the held deps.
    fn use_deps<T, F>(&self, deps_fn: F) -> T
    where
        F: FnMut(&mut DepsMutC) -> T;
}
