use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250101_000002_create_asset_tables::Migration),
            Box::new(m20250101_000003_create_inventory_tables::Migration),
            Box::new(m20250101_000004_create_work_order_tables::Migration),
            Box::new(m20250101_000005_create_work_requests_table::Migration),
            Box::new(m20250101_000006_create_preventive_maintenance_tables::Migration),
            Box::new(m20250101_000007_create_notifications_table::Migration),
            Box::new(m20250101_000008_create_documents_table::Migration),
        ]
    }
}

// Migration implementations

mod m20250101_000001_create_users_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000001_create_users_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Users::Username)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::Password).string().not_null())
                        .col(ColumnDef::new(Users::Name).string().not_null())
                        .col(ColumnDef::new(Users::Email).string().null())
                        .col(ColumnDef::new(Users::Role).string().not_null())
                        .col(ColumnDef::new(Users::Phone).string().null())
                        .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Users {
        Table,
        Id,
        Username,
        Password,
        Name,
        Email,
        Role,
        Phone,
        CreatedAt,
    }
}

mod m20250101_000002_create_asset_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000002_create_asset_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(AssetTypes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AssetTypes::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(AssetTypes::Name).string().not_null())
                        .col(ColumnDef::new(AssetTypes::Description).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Assets::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Assets::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Assets::AssetNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Assets::Name).string().not_null())
                        .col(ColumnDef::new(Assets::Description).string().null())
                        .col(ColumnDef::new(Assets::TypeId).integer().null())
                        .col(ColumnDef::new(Assets::Location).string().null())
                        .col(
                            ColumnDef::new(Assets::Status)
                                .string()
                                .not_null()
                                .default("operational"),
                        )
                        .col(ColumnDef::new(Assets::PurchaseDate).date().null())
                        .col(ColumnDef::new(Assets::PurchaseCost).decimal().null())
                        .col(ColumnDef::new(Assets::Manufacturer).string().null())
                        .col(ColumnDef::new(Assets::ModelNumber).string().null())
                        .col(ColumnDef::new(Assets::SerialNumber).string().null())
                        .col(ColumnDef::new(Assets::Barcode).string().null())
                        .col(ColumnDef::new(Assets::Notes).string().null())
                        .col(ColumnDef::new(Assets::CreatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assets_type_id")
                                .from(Assets::Table, Assets::TypeId)
                                .to(AssetTypes::Table, AssetTypes::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_assets_barcode")
                        .table(Assets::Table)
                        .col(Assets::Barcode)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Assets::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(AssetTypes::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum AssetTypes {
        Table,
        Id,
        Name,
        Description,
    }

    #[derive(Iden)]
    enum Assets {
        Table,
        Id,
        AssetNumber,
        Name,
        Description,
        TypeId,
        Location,
        Status,
        PurchaseDate,
        PurchaseCost,
        Manufacturer,
        ModelNumber,
        SerialNumber,
        Barcode,
        Notes,
        CreatedAt,
    }
}

mod m20250101_000003_create_inventory_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000003_create_inventory_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryCategories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryCategories::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCategories::Name)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryCategories::Description)
                                .string()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(InventoryItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryItems::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::PartNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(InventoryItems::Name).string().not_null())
                        .col(ColumnDef::new(InventoryItems::Description).string().null())
                        .col(ColumnDef::new(InventoryItems::CategoryId).integer().null())
                        .col(
                            ColumnDef::new(InventoryItems::QuantityInStock)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::MinimumStock)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(InventoryItems::UnitCost).decimal().null())
                        .col(ColumnDef::new(InventoryItems::Location).string().null())
                        .col(ColumnDef::new(InventoryItems::Supplier).string().null())
                        .col(ColumnDef::new(InventoryItems::Barcode).string().null())
                        .col(
                            ColumnDef::new(InventoryItems::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_inventory_items_category_id")
                                .from(InventoryItems::Table, InventoryItems::CategoryId)
                                .to(InventoryCategories::Table, InventoryCategories::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_inventory_items_barcode")
                        .table(InventoryItems::Table)
                        .col(InventoryItems::Barcode)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(InventoryCategories::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum InventoryCategories {
        Table,
        Id,
        Name,
        Description,
    }

    #[derive(Iden)]
    enum InventoryItems {
        Table,
        Id,
        PartNumber,
        Name,
        Description,
        CategoryId,
        QuantityInStock,
        MinimumStock,
        UnitCost,
        Location,
        Supplier,
        Barcode,
        CreatedAt,
    }
}

mod m20250101_000004_create_work_order_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000004_create_work_order_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(WorkOrderTypes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkOrderTypes::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WorkOrderTypes::Name).string().not_null())
                        .col(ColumnDef::new(WorkOrderTypes::Description).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(WorkOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkOrders::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::WorkOrderNumber)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WorkOrders::Title).string().not_null())
                        .col(ColumnDef::new(WorkOrders::Description).string().null())
                        .col(ColumnDef::new(WorkOrders::TypeId).integer().null())
                        .col(ColumnDef::new(WorkOrders::AssetId).integer().null())
                        .col(ColumnDef::new(WorkOrders::Priority).string().not_null())
                        .col(ColumnDef::new(WorkOrders::Status).string().not_null())
                        .col(ColumnDef::new(WorkOrders::RequestedById).integer().null())
                        .col(ColumnDef::new(WorkOrders::AssignedToId).integer().null())
                        .col(
                            ColumnDef::new(WorkOrders::DateRequested)
                                .timestamp()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WorkOrders::DateNeeded).date().null())
                        .col(ColumnDef::new(WorkOrders::DateScheduled).date().null())
                        .col(ColumnDef::new(WorkOrders::DateStarted).timestamp().null())
                        .col(ColumnDef::new(WorkOrders::DateCompleted).timestamp().null())
                        .col(ColumnDef::new(WorkOrders::EstimatedHours).decimal().null())
                        .col(ColumnDef::new(WorkOrders::ActualHours).decimal().null())
                        .col(ColumnDef::new(WorkOrders::EstimatedCost).decimal().null())
                        .col(ColumnDef::new(WorkOrders::ActualCost).decimal().null())
                        .col(ColumnDef::new(WorkOrders::CompletionNotes).string().null())
                        .col(ColumnDef::new(WorkOrders::CreatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_work_orders_type_id")
                                .from(WorkOrders::Table, WorkOrders::TypeId)
                                .to(WorkOrderTypes::Table, WorkOrderTypes::Id),
                        )
                        .to_owned(),
                )
                .await?;

            // Uniqueness backs the number invariant; count-then-format alone
            // cannot survive concurrent writers.
            manager
                .create_index(
                    Index::create()
                        .name("idx_work_orders_number")
                        .table(WorkOrders::Table)
                        .col(WorkOrders::WorkOrderNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_work_orders_status")
                        .table(WorkOrders::Table)
                        .col(WorkOrders::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(WorkOrderLabor::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkOrderLabor::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WorkOrderLabor::WorkOrderId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WorkOrderLabor::UserId).integer().null())
                        .col(ColumnDef::new(WorkOrderLabor::Description).string().null())
                        .col(ColumnDef::new(WorkOrderLabor::Hours).decimal().not_null())
                        .col(ColumnDef::new(WorkOrderLabor::LaborDate).date().null())
                        .col(ColumnDef::new(WorkOrderLabor::HourlyRate).decimal().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_work_order_labor_work_order_id")
                                .from(WorkOrderLabor::Table, WorkOrderLabor::WorkOrderId)
                                .to(WorkOrders::Table, WorkOrders::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(WorkOrderParts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkOrderParts::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WorkOrderParts::WorkOrderId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WorkOrderParts::ItemId).integer().not_null())
                        .col(
                            ColumnDef::new(WorkOrderParts::QuantityUsed)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WorkOrderParts::UnitCost).decimal().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_work_order_parts_work_order_id")
                                .from(WorkOrderParts::Table, WorkOrderParts::WorkOrderId)
                                .to(WorkOrders::Table, WorkOrders::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(WorkOrderParts::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(WorkOrderLabor::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(WorkOrders::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(WorkOrderTypes::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum WorkOrderTypes {
        Table,
        Id,
        Name,
        Description,
    }

    #[derive(Iden)]
    enum WorkOrders {
        Table,
        Id,
        WorkOrderNumber,
        Title,
        Description,
        TypeId,
        AssetId,
        Priority,
        Status,
        RequestedById,
        AssignedToId,
        DateRequested,
        DateNeeded,
        DateScheduled,
        DateStarted,
        DateCompleted,
        EstimatedHours,
        ActualHours,
        EstimatedCost,
        ActualCost,
        CompletionNotes,
        CreatedAt,
    }

    #[derive(Iden)]
    enum WorkOrderLabor {
        Table,
        Id,
        WorkOrderId,
        UserId,
        Description,
        Hours,
        LaborDate,
        HourlyRate,
    }

    #[derive(Iden)]
    enum WorkOrderParts {
        Table,
        Id,
        WorkOrderId,
        ItemId,
        QuantityUsed,
        UnitCost,
    }
}

mod m20250101_000005_create_work_requests_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000005_create_work_requests_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(WorkRequests::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkRequests::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WorkRequests::RequestNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(WorkRequests::Title).string().not_null())
                        .col(ColumnDef::new(WorkRequests::Description).string().null())
                        .col(ColumnDef::new(WorkRequests::AssetId).integer().null())
                        .col(ColumnDef::new(WorkRequests::Priority).string().not_null())
                        .col(
                            ColumnDef::new(WorkRequests::Status)
                                .string()
                                .not_null()
                                .default("requested"),
                        )
                        .col(ColumnDef::new(WorkRequests::RequestedById).integer().null())
                        .col(
                            ColumnDef::new(WorkRequests::DateRequested)
                                .timestamp()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WorkRequests::DateNeeded).date().null())
                        .col(ColumnDef::new(WorkRequests::Location).string().null())
                        .col(ColumnDef::new(WorkRequests::Notes).string().null())
                        .col(
                            ColumnDef::new(WorkRequests::IsConverted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(WorkRequests::ConvertedToWorkOrderId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WorkRequests::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(WorkRequests::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum WorkRequests {
        Table,
        Id,
        RequestNumber,
        Title,
        Description,
        AssetId,
        Priority,
        Status,
        RequestedById,
        DateRequested,
        DateNeeded,
        Location,
        Notes,
        IsConverted,
        ConvertedToWorkOrderId,
        CreatedAt,
    }
}

mod m20250101_000006_create_preventive_maintenance_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000006_create_preventive_maintenance_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PreventiveMaintenance::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PreventiveMaintenance::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::Title)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::Description)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::AssetId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::MaintenanceType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::Priority)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::StartDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::Duration)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::CreatedById)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::IsRecurring)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::RecurringPeriod)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::Occurrences)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::Notes)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(PreventiveMaintenance::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PmTechnicians::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PmTechnicians::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PmTechnicians::PmId).integer().not_null())
                        .col(
                            ColumnDef::new(PmTechnicians::TechnicianId)
                                .integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_pm_technicians_pm_id")
                                .from(PmTechnicians::Table, PmTechnicians::PmId)
                                .to(PreventiveMaintenance::Table, PreventiveMaintenance::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PmWorkOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PmWorkOrders::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PmWorkOrders::PmId).integer().not_null())
                        .col(
                            ColumnDef::new(PmWorkOrders::WorkOrderId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PmWorkOrders::ScheduledDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PmWorkOrders::OccurrenceNumber)
                                .integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_pm_work_orders_pm_id")
                                .from(PmWorkOrders::Table, PmWorkOrders::PmId)
                                .to(PreventiveMaintenance::Table, PreventiveMaintenance::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_pm_work_orders_pm_id")
                        .table(PmWorkOrders::Table)
                        .col(PmWorkOrders::PmId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PmWorkOrders::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PmTechnicians::Table).to_owned())
                .await?;
            manager
                .drop_table(
                    Table::drop()
                        .table(PreventiveMaintenance::Table)
                        .to_owned(),
                )
                .await
        }
    }

    #[derive(Iden)]
    enum PreventiveMaintenance {
        Table,
        Id,
        Title,
        Description,
        AssetId,
        MaintenanceType,
        Priority,
        StartDate,
        Duration,
        CreatedById,
        IsRecurring,
        RecurringPeriod,
        Occurrences,
        IsActive,
        Notes,
        CreatedAt,
    }

    #[derive(Iden)]
    enum PmTechnicians {
        Table,
        Id,
        PmId,
        TechnicianId,
    }

    #[derive(Iden)]
    enum PmWorkOrders {
        Table,
        Id,
        PmId,
        WorkOrderId,
        ScheduledDate,
        OccurrenceNumber,
    }
}

mod m20250101_000007_create_notifications_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000007_create_notifications_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Notifications::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Notifications::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Notifications::UserId).integer().not_null())
                        .col(ColumnDef::new(Notifications::Title).string().not_null())
                        .col(ColumnDef::new(Notifications::Message).string().not_null())
                        .col(
                            ColumnDef::new(Notifications::NotificationType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Notifications::RelatedId).integer().null())
                        .col(
                            ColumnDef::new(Notifications::IsRead)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Notifications::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Notifications::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Notifications {
        Table,
        Id,
        UserId,
        Title,
        Message,
        NotificationType,
        RelatedId,
        IsRead,
        CreatedAt,
    }
}

mod m20250101_000008_create_documents_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000008_create_documents_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Documents::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Documents::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Documents::Name).string().not_null())
                        .col(ColumnDef::new(Documents::FileName).string().not_null())
                        .col(ColumnDef::new(Documents::ContentType).string().null())
                        .col(ColumnDef::new(Documents::RelatedType).string().null())
                        .col(ColumnDef::new(Documents::RelatedId).integer().null())
                        .col(ColumnDef::new(Documents::UploadedById).integer().null())
                        .col(ColumnDef::new(Documents::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Documents::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Documents {
        Table,
        Id,
        Name,
        FileName,
        ContentType,
        RelatedType,
        RelatedId,
        UploadedById,
        CreatedAt,
    }
}
