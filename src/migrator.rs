use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_cari_hesaplar_table::Migration),
            Box::new(m20240101_000002_create_yetkili_kisiler_table::Migration),
            Box::new(m20240101_000003_create_cari_hareketler_table::Migration),
            Box::new(m20240101_000004_create_teklifler_table::Migration),
            Box::new(m20240101_000005_create_teklif_kalemleri_table::Migration),
            Box::new(m20240101_000006_create_projeler_table::Migration),
            Box::new(m20240101_000007_create_gorevler_table::Migration),
            Box::new(m20240101_000008_create_users_table::Migration),
            Box::new(m20240101_000009_create_document_counters_table::Migration),
        ]
    }
}

mod m20240101_000001_create_cari_hesaplar_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_cari_hesaplar_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(CariHesaplar::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CariHesaplar::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(CariHesaplar::FirmaAdi).string().not_null())
                        .col(ColumnDef::new(CariHesaplar::CariTipi).string().not_null())
                        .col(ColumnDef::new(CariHesaplar::Bolge).string())
                        .col(ColumnDef::new(CariHesaplar::Telefon).string())
                        .col(ColumnDef::new(CariHesaplar::Email).string())
                        .col(ColumnDef::new(CariHesaplar::Adres).string())
                        .col(ColumnDef::new(CariHesaplar::VergiNo).string())
                        .col(ColumnDef::new(CariHesaplar::VergiDairesi).string())
                        .col(ColumnDef::new(CariHesaplar::Notlar).string())
                        .col(
                            ColumnDef::new(CariHesaplar::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(CariHesaplar::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CariHesaplar::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CariHesaplar::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum CariHesaplar {
        Table,
        Id,
        FirmaAdi,
        CariTipi,
        Bolge,
        Telefon,
        Email,
        Adres,
        VergiNo,
        VergiDairesi,
        Notlar,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000002_create_yetkili_kisiler_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_yetkili_kisiler_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(YetkiliKisiler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(YetkiliKisiler::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(YetkiliKisiler::CariHesapId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(YetkiliKisiler::AdSoyad).string().not_null())
                        .col(ColumnDef::new(YetkiliKisiler::Unvan).string())
                        .col(ColumnDef::new(YetkiliKisiler::Departman).string())
                        .col(ColumnDef::new(YetkiliKisiler::Telefon).string())
                        .col(ColumnDef::new(YetkiliKisiler::Email).string())
                        .col(ColumnDef::new(YetkiliKisiler::Notlar).string())
                        .col(
                            ColumnDef::new(YetkiliKisiler::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(YetkiliKisiler::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_yetkili_kisiler_cari_hesap")
                                .from(YetkiliKisiler::Table, YetkiliKisiler::CariHesapId)
                                .to(CariHesaplar::Table, CariHesaplar::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(YetkiliKisiler::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum YetkiliKisiler {
        Table,
        Id,
        CariHesapId,
        AdSoyad,
        Unvan,
        Departman,
        Telefon,
        Email,
        Notlar,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    enum CariHesaplar {
        Table,
        Id,
    }
}

mod m20240101_000003_create_cari_hareketler_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_cari_hareketler_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(CariHareketler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CariHareketler::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(CariHareketler::CariHesapId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CariHareketler::HareketTipi)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CariHareketler::Tutar)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(CariHareketler::Bakiye)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(CariHareketler::Aciklama).string())
                        .col(
                            ColumnDef::new(CariHareketler::Tarih)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(CariHareketler::ProjeId).integer())
                        .col(
                            ColumnDef::new(CariHareketler::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CariHareketler::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_cari_hareketler_cari_hesap")
                                .from(CariHareketler::Table, CariHareketler::CariHesapId)
                                .to(CariHesaplar::Table, CariHesaplar::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CariHareketler::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum CariHareketler {
        Table,
        Id,
        CariHesapId,
        HareketTipi,
        Tutar,
        Bakiye,
        Aciklama,
        Tarih,
        ProjeId,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    enum CariHesaplar {
        Table,
        Id,
    }
}

mod m20240101_000004_create_teklifler_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_teklifler_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Teklifler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Teklifler::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Teklifler::TeklifNo)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Teklifler::CariHesapId).integer().not_null())
                        .col(ColumnDef::new(Teklifler::YetkiliKisiId).integer())
                        .col(ColumnDef::new(Teklifler::TeklifTipi).string().not_null())
                        .col(ColumnDef::new(Teklifler::Konu).string().not_null())
                        .col(ColumnDef::new(Teklifler::Durum).string().not_null())
                        .col(ColumnDef::new(Teklifler::OdemeSartlari).string())
                        .col(ColumnDef::new(Teklifler::GecerlilikSuresi).string())
                        .col(ColumnDef::new(Teklifler::ParaBirimi).string().not_null())
                        .col(
                            ColumnDef::new(Teklifler::ToplamTutar)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Teklifler::Notlar).string())
                        .col(
                            ColumnDef::new(Teklifler::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Teklifler::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_teklifler_cari_hesap")
                                .from(Teklifler::Table, Teklifler::CariHesapId)
                                .to(CariHesaplar::Table, CariHesaplar::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Teklifler::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Teklifler {
        Table,
        Id,
        TeklifNo,
        CariHesapId,
        YetkiliKisiId,
        TeklifTipi,
        Konu,
        Durum,
        OdemeSartlari,
        GecerlilikSuresi,
        ParaBirimi,
        ToplamTutar,
        Notlar,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    enum CariHesaplar {
        Table,
        Id,
    }
}

mod m20240101_000005_create_teklif_kalemleri_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_teklif_kalemleri_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TeklifKalemleri::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TeklifKalemleri::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(TeklifKalemleri::TeklifId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TeklifKalemleri::UrunHizmetAdi)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(TeklifKalemleri::Miktar).decimal().not_null())
                        .col(ColumnDef::new(TeklifKalemleri::Birim).string().not_null())
                        .col(
                            ColumnDef::new(TeklifKalemleri::BirimFiyat)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(TeklifKalemleri::Tutar).decimal().not_null())
                        .col(
                            ColumnDef::new(TeklifKalemleri::Indirim)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(TeklifKalemleri::NetTutar)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TeklifKalemleri::KdvOrani)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(TeklifKalemleri::Toplam).decimal().not_null())
                        .col(
                            ColumnDef::new(TeklifKalemleri::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TeklifKalemleri::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_teklif_kalemleri_teklif")
                                .from(TeklifKalemleri::Table, TeklifKalemleri::TeklifId)
                                .to(Teklifler::Table, Teklifler::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(TeklifKalemleri::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum TeklifKalemleri {
        Table,
        Id,
        TeklifId,
        UrunHizmetAdi,
        Miktar,
        Birim,
        BirimFiyat,
        Tutar,
        Indirim,
        NetTutar,
        KdvOrani,
        Toplam,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    enum Teklifler {
        Table,
        Id,
    }
}

mod m20240101_000006_create_projeler_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_projeler_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Projeler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Projeler::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Projeler::ProjeNo)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Projeler::CariHesapId).integer().not_null())
                        .col(ColumnDef::new(Projeler::TeklifId).integer())
                        .col(ColumnDef::new(Projeler::ProjeAdi).string().not_null())
                        .col(ColumnDef::new(Projeler::Durum).string().not_null())
                        .col(ColumnDef::new(Projeler::BaslangicTarihi).date().not_null())
                        .col(ColumnDef::new(Projeler::BitisTarihi).date())
                        .col(ColumnDef::new(Projeler::Butce).decimal().not_null().default(0))
                        .col(
                            ColumnDef::new(Projeler::Harcanan)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Projeler::TamamlanmaYuzdesi)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Projeler::Sorumlu).string())
                        .col(ColumnDef::new(Projeler::Aciklama).string())
                        .col(ColumnDef::new(Projeler::Notlar).string())
                        .col(
                            ColumnDef::new(Projeler::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Projeler::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_projeler_cari_hesap")
                                .from(Projeler::Table, Projeler::CariHesapId)
                                .to(CariHesaplar::Table, CariHesaplar::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Projeler::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Projeler {
        Table,
        Id,
        ProjeNo,
        CariHesapId,
        TeklifId,
        ProjeAdi,
        Durum,
        BaslangicTarihi,
        BitisTarihi,
        Butce,
        Harcanan,
        TamamlanmaYuzdesi,
        Sorumlu,
        Aciklama,
        Notlar,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    enum CariHesaplar {
        Table,
        Id,
    }
}

mod m20240101_000007_create_gorevler_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000007_create_gorevler_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Gorevler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Gorevler::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Gorevler::Baslik).string().not_null())
                        .col(ColumnDef::new(Gorevler::Aciklama).string())
                        .col(ColumnDef::new(Gorevler::Durum).string().not_null())
                        .col(ColumnDef::new(Gorevler::Oncelik).string().not_null())
                        .col(ColumnDef::new(Gorevler::BaslangicTarihi).date())
                        .col(ColumnDef::new(Gorevler::BitisTarihi).date())
                        .col(ColumnDef::new(Gorevler::SonTarih).date())
                        .col(ColumnDef::new(Gorevler::Atanan).string())
                        .col(ColumnDef::new(Gorevler::CariHesapId).integer())
                        .col(ColumnDef::new(Gorevler::ProjeId).integer())
                        .col(ColumnDef::new(Gorevler::Sira).integer().not_null().default(0))
                        .col(ColumnDef::new(Gorevler::Etiketler).json().not_null())
                        .col(ColumnDef::new(Gorevler::Dosyalar).json().not_null())
                        .col(
                            ColumnDef::new(Gorevler::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Gorevler::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Gorevler::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Gorevler {
        Table,
        Id,
        Baslik,
        Aciklama,
        Durum,
        Oncelik,
        BaslangicTarihi,
        BitisTarihi,
        SonTarih,
        Atanan,
        CariHesapId,
        ProjeId,
        Sira,
        Etiketler,
        Dosyalar,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000008_create_users_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000008_create_users_table"
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
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                        .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
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
        PasswordHash,
        CreatedAt,
    }
}

mod m20240101_000009_create_document_counters_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000009_create_document_counters_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DocumentCounters::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DocumentCounters::Scope)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(DocumentCounters::Value).integer().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DocumentCounters::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum DocumentCounters {
        Table,
        Scope,
        Value,
    }
}
