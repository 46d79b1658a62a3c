use mockall::mock;
use r3000_core::Fault;
use r3000_core::core::CycleEvent;
use r3000_core::sim::CycleObserver;

mock! {
    pub Observer {}
    impl CycleObserver for Observer {
        fn on_cycle(&mut self, event: &CycleEvent);
        fn on_fault(&mut self, fault: &Fault);
    }
}
