use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
    Name,
    Owner,
    Phone,
    Email,
    Address,
    City,
    Zip,
    SpecialNote,
}

#[derive(DeriveIden)]
enum Supervisor {
    Table,
    Id,
    CompanyId,
    Name,
    Phone,
    Email,
}

#[derive(DeriveIden)]
enum Property {
    Table,
    Id,
    SupervisorId,
    Name,
    Address,
    City,
    Zip,
    GateCode,
    LockBox,
    GarageRemoteCode,
    ManagerName,
    ManagerPhone,
    ManagerEmail,
    SpecialNote,
    IsActive,
}

#[derive(DeriveIden)]
enum Contractor {
    Table,
    Id,
    Name,
    LicenseNumber,
    SocialSecurityNumber,
    ContractorNumber,
    PayrollPercent,
    CellPhone,
    Email,
    Address,
    City,
    Zip,
    SpecialNote,
    IsActive,
}

#[derive(DeriveIden)]
enum JobDescription {
    Table,
    Id,
    Description,
    SizeBedroom,
    SizeBathroom,
    Price,
}

#[derive(DeriveIden)]
enum Invoice {
    Table,
    Id,
    WorkOrder,
    JobDescriptionChoice,
    ContractorName,
    CompanyName,
    PropertyAddress,
    Unit,
    AmountCost,
    FirstPayment,
    FirstCheckNumber,
    FirstPaidOn,
    SecondPayment,
    SecondCheckNumber,
    SecondPaidOn,
    TodaysDate,
    WorkDate,
    CreatedDate,
    SpecialNote,
    GateCode,
    LockBox,
    GarageRemoteCode,
    SizeBedroom,
    SizeBathroom,
    Status,
}

#[derive(DeriveIden)]
enum MyCompanyInfo {
    Table,
    Id,
    Name,
    Phone,
    Email,
    Address,
    Zip,
    LicenseNumber,
}

fn id_column<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(id_column(Company::Id))
                    .col(ColumnDef::new(Company::Name).text().not_null())
                    .col(ColumnDef::new(Company::Owner).string())
                    .col(ColumnDef::new(Company::Phone).string())
                    .col(ColumnDef::new(Company::Email).string())
                    .col(ColumnDef::new(Company::Address).string())
                    .col(ColumnDef::new(Company::City).string())
                    .col(ColumnDef::new(Company::Zip).string())
                    .col(ColumnDef::new(Company::SpecialNote).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Supervisor::Table)
                    .if_not_exists()
                    .col(id_column(Supervisor::Id))
                    .col(ColumnDef::new(Supervisor::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Supervisor::Name).text().not_null())
                    .col(ColumnDef::new(Supervisor::Phone).string())
                    .col(ColumnDef::new(Supervisor::Email).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supervisor_company")
                            .from(Supervisor::Table, Supervisor::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(id_column(Property::Id))
                    .col(ColumnDef::new(Property::SupervisorId).integer().not_null())
                    .col(ColumnDef::new(Property::Name).text().not_null())
                    .col(ColumnDef::new(Property::Address).string())
                    .col(ColumnDef::new(Property::City).string())
                    .col(ColumnDef::new(Property::Zip).string())
                    .col(ColumnDef::new(Property::GateCode).string())
                    .col(ColumnDef::new(Property::LockBox).string())
                    .col(ColumnDef::new(Property::GarageRemoteCode).string())
                    .col(ColumnDef::new(Property::ManagerName).string())
                    .col(ColumnDef::new(Property::ManagerPhone).string())
                    .col(ColumnDef::new(Property::ManagerEmail).string())
                    .col(ColumnDef::new(Property::SpecialNote).text())
                    .col(ColumnDef::new(Property::IsActive).boolean())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_supervisor")
                            .from(Property::Table, Property::SupervisorId)
                            .to(Supervisor::Table, Supervisor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Contractor::Table)
                    .if_not_exists()
                    .col(id_column(Contractor::Id))
                    .col(ColumnDef::new(Contractor::Name).text().not_null())
                    .col(ColumnDef::new(Contractor::LicenseNumber).string())
                    .col(ColumnDef::new(Contractor::SocialSecurityNumber).string())
                    .col(ColumnDef::new(Contractor::ContractorNumber).string())
                    .col(ColumnDef::new(Contractor::PayrollPercent).string())
                    .col(ColumnDef::new(Contractor::CellPhone).string())
                    .col(ColumnDef::new(Contractor::Email).string())
                    .col(ColumnDef::new(Contractor::Address).string())
                    .col(ColumnDef::new(Contractor::City).string())
                    .col(ColumnDef::new(Contractor::Zip).string())
                    .col(ColumnDef::new(Contractor::SpecialNote).text())
                    .col(ColumnDef::new(Contractor::IsActive).boolean())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobDescription::Table)
                    .if_not_exists()
                    .col(id_column(JobDescription::Id))
                    .col(ColumnDef::new(JobDescription::Description).text().not_null())
                    .col(
                        ColumnDef::new(JobDescription::SizeBedroom)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(JobDescription::SizeBathroom)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(JobDescription::Price)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(id_column(Invoice::Id))
                    .col(ColumnDef::new(Invoice::WorkOrder).string())
                    .col(
                        ColumnDef::new(Invoice::JobDescriptionChoice)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Invoice::ContractorName).string())
                    .col(ColumnDef::new(Invoice::CompanyName).string().not_null())
                    .col(ColumnDef::new(Invoice::PropertyAddress).string().not_null())
                    .col(ColumnDef::new(Invoice::Unit).string().not_null())
                    .col(
                        ColumnDef::new(Invoice::AmountCost)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Invoice::FirstPayment)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Invoice::FirstCheckNumber).string())
                    .col(ColumnDef::new(Invoice::FirstPaidOn).date())
                    .col(
                        ColumnDef::new(Invoice::SecondPayment)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Invoice::SecondCheckNumber).string())
                    .col(ColumnDef::new(Invoice::SecondPaidOn).date())
                    .col(ColumnDef::new(Invoice::TodaysDate).date().not_null())
                    .col(ColumnDef::new(Invoice::WorkDate).date().not_null())
                    .col(ColumnDef::new(Invoice::CreatedDate).date().not_null())
                    .col(ColumnDef::new(Invoice::SpecialNote).text())
                    .col(ColumnDef::new(Invoice::GateCode).string())
                    .col(ColumnDef::new(Invoice::LockBox).string())
                    .col(ColumnDef::new(Invoice::GarageRemoteCode).string())
                    .col(
                        ColumnDef::new(Invoice::SizeBedroom)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Invoice::SizeBathroom)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Invoice::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invoice_work_date")
                    .table(Invoice::Table)
                    .col(Invoice::WorkDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MyCompanyInfo::Table)
                    .if_not_exists()
                    .col(id_column(MyCompanyInfo::Id))
                    .col(ColumnDef::new(MyCompanyInfo::Name).string().not_null())
                    .col(ColumnDef::new(MyCompanyInfo::Phone).string().not_null())
                    .col(ColumnDef::new(MyCompanyInfo::Email).string().not_null())
                    .col(ColumnDef::new(MyCompanyInfo::Address).string().not_null())
                    .col(ColumnDef::new(MyCompanyInfo::Zip).string().not_null())
                    .col(
                        ColumnDef::new(MyCompanyInfo::LicenseNumber)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MyCompanyInfo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobDescription::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contractor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Property::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Supervisor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await?;

        Ok(())
    }
}
