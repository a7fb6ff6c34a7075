//! # PostgreSQL Market Store
//!
//! PostgreSQL implementation of [`MarketStore`] using sqlx.
//!
//! Row locks come from `SELECT ... FOR UPDATE` inside a `sqlx::Transaction`,
//! so two transactions that lock the same player serialise on the database.
//! Prices are stored as unconstrained `NUMERIC`, so any `Decimal` the domain
//! accepts round-trips unchanged. Timestamps are `TIMESTAMPTZ`.
//! Both tables that need "newest first" ordering carry a `BIGSERIAL seq`
//! column used to break timestamp ties.

use crate::domain::entities::{Club, Negotiation, Player, TransferKind, TransferRecord};
use crate::domain::value_objects::{
    ClubId, NegotiationId, NegotiationStatus, PlayerId, Price, Timestamp, TransferId,
};
use crate::infrastructure::persistence::traits::{
    MarketStore, MarketTransaction, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

const SCHEMA: [&str; 11] = [
    r#"
    CREATE TABLE IF NOT EXISTS clubs (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        country TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS players (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        position TEXT NOT NULL,
        age SMALLINT,
        nationality TEXT,
        market_value NUMERIC NOT NULL CHECK (market_value >= 0),
        current_club UUID NOT NULL,
        listed_for_sale BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS negotiations (
        id UUID PRIMARY KEY,
        seq BIGSERIAL NOT NULL,
        from_club UUID NOT NULL,
        to_club UUID NOT NULL,
        player_id UUID NOT NULL REFERENCES players(id),
        offered_price NUMERIC NOT NULL CHECK (offered_price > 0),
        status TEXT NOT NULL
            CHECK (status IN ('pending', 'accepted', 'rejected', 'cancelled')),
        created_at TIMESTAMPTZ NOT NULL,
        resolved_at TIMESTAMPTZ,
        CHECK (from_club <> to_club)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transfers (
        id UUID PRIMARY KEY,
        seq BIGSERIAL NOT NULL,
        player_id UUID NOT NULL REFERENCES players(id),
        seller UUID NOT NULL,
        buyer UUID NOT NULL,
        price NUMERIC NOT NULL,
        kind TEXT NOT NULL CHECK (kind IN ('direct_purchase', 'negotiated')),
        negotiation_id UUID REFERENCES negotiations(id),
        occurred_at TIMESTAMPTZ NOT NULL
    )
    "#,
    // Databases created with a fixed-scale price column are widened in place.
    "ALTER TABLE players ALTER COLUMN market_value TYPE NUMERIC",
    "ALTER TABLE negotiations ALTER COLUMN offered_price TYPE NUMERIC",
    "ALTER TABLE transfers ALTER COLUMN price TYPE NUMERIC",
    "CREATE INDEX IF NOT EXISTS idx_negotiations_to_club ON negotiations (to_club, created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_negotiations_from_club ON negotiations (from_club, created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_negotiations_pending ON negotiations (player_id) WHERE status = 'pending'",
    "CREATE INDEX IF NOT EXISTS idx_transfers_player ON transfers (player_id, occurred_at)",
];

const PLAYER_COLUMNS: &str =
    "id, name, position, age, nationality, market_value, current_club, listed_for_sale";

const NEGOTIATION_COLUMNS: &str =
    "id, from_club, to_club, player_id, offered_price, status, created_at, resolved_at";

/// PostgreSQL implementation of [`MarketStore`].
///
/// # Examples
///
/// ```ignore
/// use transfer_market::infrastructure::persistence::postgres::PostgresMarketStore;
///
/// let store = PostgresMarketStore::connect("postgres://...", 10, Duration::from_secs(5)).await?;
/// store.migrate().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresMarketStore {
    pool: PgPool,
}

impl PostgresMarketStore {
    /// Creates a store over an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool and wraps it in a store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the database is unreachable.
    pub async fn connect(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> RepositoryResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the market tables and indexes if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Query` if any statement fails.
    pub async fn migrate(&self) -> RepositoryResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(query_error)?;
        }
        info!(statements = SCHEMA.len(), "market schema ready");
        Ok(())
    }

    async fn fetch_negotiations(
        &self,
        filter: &str,
        key: Uuid,
    ) -> RepositoryResult<Vec<Negotiation>> {
        let sql = format!(
            "SELECT {NEGOTIATION_COLUMNS} FROM negotiations WHERE {filter} = $1 \
             ORDER BY created_at DESC, seq DESC"
        );
        let rows: Vec<NegotiationRow> = sqlx::query_as(&sql)
            .bind(key)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;
        rows.into_iter().map(NegotiationRow::into_negotiation).collect()
    }
}

#[async_trait]
impl MarketStore for PostgresMarketStore {
    async fn begin(&self) -> RepositoryResult<Box<dyn MarketTransaction>> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;
        Ok(Box::new(PostgresMarketTransaction { tx }))
    }

    async fn save_club(&self, club: &Club) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO clubs (id, name, country) VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, country = EXCLUDED.country
            "#,
        )
        .bind(club.id().as_uuid())
        .bind(club.name())
        .bind(club.country())
        .execute(&self.pool)
        .await
        .map_err(query_error)?;
        Ok(())
    }

    async fn save_player(&self, player: &Player) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO players (
                id, name, position, age, nationality,
                market_value, current_club, listed_for_sale
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                position = EXCLUDED.position,
                age = EXCLUDED.age,
                nationality = EXCLUDED.nationality,
                market_value = EXCLUDED.market_value,
                current_club = EXCLUDED.current_club,
                listed_for_sale = EXCLUDED.listed_for_sale
            "#,
        )
        .bind(player.id().as_uuid())
        .bind(player.name())
        .bind(player.position())
        .bind(player.age().map(i16::from))
        .bind(player.nationality())
        .bind(player.market_value().amount())
        .bind(player.current_club().as_uuid())
        .bind(player.is_listed_for_sale())
        .execute(&self.pool)
        .await
        .map_err(query_error)?;
        Ok(())
    }

    async fn get_club(&self, id: &ClubId) -> RepositoryResult<Option<Club>> {
        let row: Option<ClubRow> = sqlx::query_as("SELECT id, name, country FROM clubs WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;
        Ok(row.map(ClubRow::into_club))
    }

    async fn get_player(&self, id: &PlayerId) -> RepositoryResult<Option<Player>> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1");
        let row: Option<PlayerRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;
        row.map(PlayerRow::into_player).transpose()
    }

    async fn get_negotiation(&self, id: &NegotiationId) -> RepositoryResult<Option<Negotiation>> {
        let sql = format!("SELECT {NEGOTIATION_COLUMNS} FROM negotiations WHERE id = $1");
        let row: Option<NegotiationRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;
        row.map(NegotiationRow::into_negotiation).transpose()
    }

    async fn find_players_by_club(&self, club: &ClubId) -> RepositoryResult<Vec<Player>> {
        let sql =
            format!("SELECT {PLAYER_COLUMNS} FROM players WHERE current_club = $1 ORDER BY name, id");
        let rows: Vec<PlayerRow> = sqlx::query_as(&sql)
            .bind(club.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;
        rows.into_iter().map(PlayerRow::into_player).collect()
    }

    async fn find_players_for_sale(&self) -> RepositoryResult<Vec<Player>> {
        let sql =
            format!("SELECT {PLAYER_COLUMNS} FROM players WHERE listed_for_sale ORDER BY name, id");
        let rows: Vec<PlayerRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;
        rows.into_iter().map(PlayerRow::into_player).collect()
    }

    async fn find_negotiations_received(
        &self,
        club: &ClubId,
    ) -> RepositoryResult<Vec<Negotiation>> {
        self.fetch_negotiations("to_club", club.as_uuid()).await
    }

    async fn find_negotiations_sent(&self, club: &ClubId) -> RepositoryResult<Vec<Negotiation>> {
        self.fetch_negotiations("from_club", club.as_uuid()).await
    }

    async fn find_negotiations_by_player(
        &self,
        player: &PlayerId,
    ) -> RepositoryResult<Vec<Negotiation>> {
        self.fetch_negotiations("player_id", player.as_uuid()).await
    }

    async fn find_transfers_by_player(
        &self,
        player: &PlayerId,
    ) -> RepositoryResult<Vec<TransferRecord>> {
        let rows: Vec<TransferRow> = sqlx::query_as(
            r#"
            SELECT id, player_id, seller, buyer, price, kind, negotiation_id, occurred_at
            FROM transfers
            WHERE player_id = $1
            ORDER BY occurred_at ASC, seq ASC
            "#,
        )
        .bind(player.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;
        rows.into_iter().map(TransferRow::into_record).collect()
    }
}

/// Transaction over a [`PostgresMarketStore`].
///
/// Dropping the inner `sqlx::Transaction` without commit rolls it back.
struct PostgresMarketTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl MarketTransaction for PostgresMarketTransaction {
    async fn lock_player(&mut self, id: &PlayerId) -> RepositoryResult<Option<Player>> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1 FOR UPDATE");
        let row: Option<PlayerRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(query_error)?;
        row.map(PlayerRow::into_player).transpose()
    }

    async fn get_negotiation(
        &mut self,
        id: &NegotiationId,
    ) -> RepositoryResult<Option<Negotiation>> {
        let sql = format!("SELECT {NEGOTIATION_COLUMNS} FROM negotiations WHERE id = $1");
        let row: Option<NegotiationRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(query_error)?;
        row.map(NegotiationRow::into_negotiation).transpose()
    }

    async fn lock_negotiation(
        &mut self,
        id: &NegotiationId,
    ) -> RepositoryResult<Option<Negotiation>> {
        let sql = format!("SELECT {NEGOTIATION_COLUMNS} FROM negotiations WHERE id = $1 FOR UPDATE");
        let row: Option<NegotiationRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(query_error)?;
        row.map(NegotiationRow::into_negotiation).transpose()
    }

    async fn lock_pending_for_player(
        &mut self,
        player: &PlayerId,
    ) -> RepositoryResult<Vec<Negotiation>> {
        let sql = format!(
            "SELECT {NEGOTIATION_COLUMNS} FROM negotiations \
             WHERE player_id = $1 AND status = 'pending' \
             ORDER BY created_at DESC, seq DESC FOR UPDATE"
        );
        let rows: Vec<NegotiationRow> = sqlx::query_as(&sql)
            .bind(player.as_uuid())
            .fetch_all(&mut *self.tx)
            .await
            .map_err(query_error)?;
        rows.into_iter().map(NegotiationRow::into_negotiation).collect()
    }

    async fn update_player(&mut self, player: &Player) -> RepositoryResult<()> {
        let result = sqlx::query(
            "UPDATE players SET current_club = $2, listed_for_sale = $3 WHERE id = $1",
        )
        .bind(player.id().as_uuid())
        .bind(player.current_club().as_uuid())
        .bind(player.is_listed_for_sale())
        .execute(&mut *self.tx)
        .await
        .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Player", player.id().to_string()));
        }
        Ok(())
    }

    async fn insert_negotiation(&mut self, negotiation: &Negotiation) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO negotiations (
                id, from_club, to_club, player_id,
                offered_price, status, created_at, resolved_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(negotiation.id().as_uuid())
        .bind(negotiation.from_club().as_uuid())
        .bind(negotiation.to_club().as_uuid())
        .bind(negotiation.player_id().as_uuid())
        .bind(negotiation.offered_price().amount())
        .bind(negotiation.status().as_str())
        .bind(*negotiation.created_at().as_datetime())
        .bind(negotiation.resolved_at().map(|t| *t.as_datetime()))
        .execute(&mut *self.tx)
        .await
        .map_err(|e| insert_error("Negotiation", negotiation.id().to_string(), e))?;
        Ok(())
    }

    async fn update_negotiation(&mut self, negotiation: &Negotiation) -> RepositoryResult<()> {
        let result =
            sqlx::query("UPDATE negotiations SET status = $2, resolved_at = $3 WHERE id = $1")
                .bind(negotiation.id().as_uuid())
                .bind(negotiation.status().as_str())
                .bind(negotiation.resolved_at().map(|t| *t.as_datetime()))
                .execute(&mut *self.tx)
                .await
                .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(
                "Negotiation",
                negotiation.id().to_string(),
            ));
        }
        Ok(())
    }

    async fn insert_transfer(&mut self, record: &TransferRecord) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO transfers (
                id, player_id, seller, buyer, price, kind, negotiation_id, occurred_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.player_id().as_uuid())
        .bind(record.seller().as_uuid())
        .bind(record.buyer().as_uuid())
        .bind(record.price().amount())
        .bind(record.kind().as_str())
        .bind(record.negotiation_id().map(|id| id.as_uuid()))
        .bind(*record.occurred_at().as_datetime())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| insert_error("TransferRecord", record.id().to_string(), e))?;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> RepositoryResult<()> {
        self.tx.commit().await.map_err(query_error)
    }

    async fn rollback(self: Box<Self>) -> RepositoryResult<()> {
        self.tx.rollback().await.map_err(query_error)
    }
}

fn query_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::connection(e.to_string())
        }
        other => RepositoryError::query(other.to_string()),
    }
}

fn insert_error(entity_type: &'static str, id: String, e: sqlx::Error) -> RepositoryError {
    let unique_violation =
        matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
    if unique_violation {
        return RepositoryError::duplicate(entity_type, id);
    }
    query_error(e)
}

fn price_from(amount: Decimal) -> RepositoryResult<Price> {
    Price::new(amount).map_err(|e| RepositoryError::serialization(e.to_string()))
}

/// Row type for club queries.
#[derive(Debug, sqlx::FromRow)]
struct ClubRow {
    id: Uuid,
    name: String,
    country: String,
}

impl ClubRow {
    fn into_club(self) -> Club {
        Club::from_parts(ClubId::new(self.id), self.name, self.country)
    }
}

/// Row type for player queries.
#[derive(Debug, sqlx::FromRow)]
struct PlayerRow {
    id: Uuid,
    name: String,
    position: String,
    age: Option<i16>,
    nationality: Option<String>,
    market_value: Decimal,
    current_club: Uuid,
    listed_for_sale: bool,
}

impl PlayerRow {
    fn into_player(self) -> RepositoryResult<Player> {
        let age = self
            .age
            .map(u8::try_from)
            .transpose()
            .map_err(|e| RepositoryError::serialization(format!("player age: {e}")))?;

        Ok(Player::from_parts(
            PlayerId::new(self.id),
            self.name,
            self.position,
            age,
            self.nationality,
            price_from(self.market_value)?,
            ClubId::new(self.current_club),
            self.listed_for_sale,
        ))
    }
}

/// Row type for negotiation queries.
#[derive(Debug, sqlx::FromRow)]
struct NegotiationRow {
    id: Uuid,
    from_club: Uuid,
    to_club: Uuid,
    player_id: Uuid,
    offered_price: Decimal,
    status: String,
    created_at: DateTime<Utc>,
    resolved_at: Option<DateTime<Utc>>,
}

impl NegotiationRow {
    fn into_negotiation(self) -> RepositoryResult<Negotiation> {
        let status = self
            .status
            .parse::<NegotiationStatus>()
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;

        Ok(Negotiation::from_parts(
            NegotiationId::new(self.id),
            ClubId::new(self.from_club),
            ClubId::new(self.to_club),
            PlayerId::new(self.player_id),
            price_from(self.offered_price)?,
            status,
            Timestamp::from(self.created_at),
            self.resolved_at.map(Timestamp::from),
        ))
    }
}

/// Row type for transfer ledger queries.
#[derive(Debug, sqlx::FromRow)]
struct TransferRow {
    id: Uuid,
    player_id: Uuid,
    seller: Uuid,
    buyer: Uuid,
    price: Decimal,
    kind: String,
    negotiation_id: Option<Uuid>,
    occurred_at: DateTime<Utc>,
}

impl TransferRow {
    fn into_record(self) -> RepositoryResult<TransferRecord> {
        let kind: TransferKind = self.kind.parse().map_err(RepositoryError::serialization)?;

        Ok(TransferRecord::from_parts(
            TransferId::new(self.id),
            PlayerId::new(self.player_id),
            ClubId::new(self.seller),
            ClubId::new(self.buyer),
            price_from(self.price)?,
            kind,
            self.negotiation_id.map(NegotiationId::new),
            Timestamp::from(self.occurred_at),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn schema_creates_every_table() {
        let ddl = SCHEMA.join("\n");
        for table in ["clubs", "players", "negotiations", "transfers"] {
            assert!(ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {table}")));
        }
    }

    #[test]
    fn price_columns_keep_full_precision() {
        let ddl = SCHEMA.join("\n");
        assert!(!ddl.contains("NUMERIC("));
        for column in ["market_value NUMERIC", "offered_price NUMERIC", "price NUMERIC"] {
            assert!(ddl.contains(column), "missing {column}");
        }
    }

    #[test]
    fn fractional_and_large_prices_map_unchanged() {
        for amount in [
            Decimal::new(1, 3),
            Decimal::new(1_000_000_005, 3),
            Decimal::from(10_000_000_000_000_i64),
        ] {
            let row = NegotiationRow {
                id: Uuid::new_v4(),
                from_club: Uuid::new_v4(),
                to_club: Uuid::new_v4(),
                player_id: Uuid::new_v4(),
                offered_price: amount,
                status: "pending".to_string(),
                created_at: Utc::now(),
                resolved_at: None,
            };
            let negotiation = row.into_negotiation().unwrap();
            assert_eq!(negotiation.offered_price().amount(), amount);
            assert_eq!(negotiation.offered_price().amount().scale(), amount.scale());
        }
    }

    #[test]
    fn negotiation_row_maps_to_domain() {
        let row = NegotiationRow {
            id: Uuid::new_v4(),
            from_club: Uuid::new_v4(),
            to_club: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            offered_price: Decimal::new(150_000_000, 2),
            status: "rejected".to_string(),
            created_at: Utc::now(),
            resolved_at: Some(Utc::now()),
        };
        let id = row.id;
        let negotiation = row.into_negotiation().unwrap();
        assert_eq!(negotiation.id().as_uuid(), id);
        assert_eq!(negotiation.status(), NegotiationStatus::Rejected);
        assert_eq!(negotiation.offered_price().amount(), Decimal::from(1_500_000));
    }

    #[test]
    fn unknown_status_is_serialization_error() {
        let row = NegotiationRow {
            id: Uuid::new_v4(),
            from_club: Uuid::new_v4(),
            to_club: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            offered_price: Decimal::ONE,
            status: "withdrawn".to_string(),
            created_at: Utc::now(),
            resolved_at: None,
        };
        let err = row.into_negotiation().unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }

    #[test]
    fn out_of_range_age_is_serialization_error() {
        let row = PlayerRow {
            id: Uuid::new_v4(),
            name: "Saka".to_string(),
            position: "RW".to_string(),
            age: Some(-3),
            nationality: None,
            market_value: Decimal::from(100),
            current_club: Uuid::new_v4(),
            listed_for_sale: false,
        };
        assert!(matches!(
            row.into_player(),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn transfer_row_maps_kind() {
        let row = TransferRow {
            id: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            seller: Uuid::new_v4(),
            buyer: Uuid::new_v4(),
            price: Decimal::from(10),
            kind: "direct_purchase".to_string(),
            negotiation_id: None,
            occurred_at: Utc::now(),
        };
        let record = row.into_record().unwrap();
        assert_eq!(record.kind(), TransferKind::DirectPurchase);
        assert!(record.negotiation_id().is_none());
    }
}
