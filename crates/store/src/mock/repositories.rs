use mockall::mock;
use rehearsal_core::{AvailabilityTable, Musician, PieceTable};

use crate::RosterStore;

// Mock store for testing the planner without touching the filesystem
mock! {
    pub RosterStore {}

    impl RosterStore for RosterStore {
        fn load_musicians(&self) -> eyre::Result<Vec<Musician>>;

        fn save_musicians(&self, musicians: &[Musician]) -> eyre::Result<()>;

        fn load_availability(&self) -> eyre::Result<AvailabilityTable>;

        fn save_availability(&self, table: &AvailabilityTable) -> eyre::Result<()>;

        fn load_pieces(&self) -> eyre::Result<PieceTable>;

        fn save_pieces(&self, table: &PieceTable) -> eyre::Result<()>;
    }
}
