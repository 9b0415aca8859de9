mod lifecycle_service_impl;

pub use lifecycle_service_impl::LifecycleServiceImpl;
