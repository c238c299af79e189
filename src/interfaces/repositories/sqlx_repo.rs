use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxMessageRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSettingsRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxVisitRepo {
    pub pool: PgPool,
}
