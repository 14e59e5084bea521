//! OpenAPI document served under `/docs`.

use utoipa::OpenApi;

use crate::entities::{
    cari_hareket, cari_hesap, gorev, proje, teklif, teklif_kalemi, user::SafeUser, yetkili_kisi,
};
use crate::errors::ErrorResponse;
use crate::handlers::auth::{CreateUserRequest, LoginRequest, LoginResponse};
use crate::services::dashboard::{DashboardStats, Period};
use crate::services::teklifler::TeklifDetay;
use crate::storage::{
    CariHesapUpdate, GorevUpdate, NewCariHareket, NewCariHesap, NewGorev, NewProje, NewTeklif,
    NewTeklifKalemi, NewYetkiliKisi, ProjeUpdate, TeklifUpdateRequest, YetkiliKisiUpdate,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "İşletme API",
        description = "Cari hesap, teklif, proje ve görev takibi için JSON API"
    ),
    components(schemas(
        cari_hesap::Model,
        cari_hesap::CariTipi,
        yetkili_kisi::Model,
        cari_hareket::Model,
        cari_hareket::HareketTipi,
        teklif::Model,
        teklif::TeklifTipi,
        teklif::TeklifDurumu,
        teklif_kalemi::Model,
        proje::Model,
        proje::ProjeDurumu,
        gorev::Model,
        gorev::GorevDurumu,
        gorev::GorevOnceligi,
        SafeUser,
        NewCariHesap,
        CariHesapUpdate,
        NewYetkiliKisi,
        YetkiliKisiUpdate,
        NewCariHareket,
        NewTeklif,
        NewTeklifKalemi,
        TeklifUpdateRequest,
        TeklifDetay,
        NewProje,
        ProjeUpdate,
        NewGorev,
        GorevUpdate,
        DashboardStats,
        Period,
        CreateUserRequest,
        LoginRequest,
        LoginResponse,
        ErrorResponse,
    )),
    tags(
        (name = "cari-hesaplar", description = "Müşteri ve tedarikçi cari hesapları"),
        (name = "teklifler", description = "Verilen ve alınan teklifler"),
        (name = "projeler", description = "Projeler"),
        (name = "gorevler", description = "Görevler"),
        (name = "dashboard", description = "Özet istatistikler"),
        (name = "auth", description = "Kullanıcı ve oturum işlemleri"),
    )
)]
pub struct ApiDoc;
