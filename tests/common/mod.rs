//! Shared fixtures for integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use rust_decimal::Decimal;
use transfer_market::application::TransferMarket;
use transfer_market::domain::entities::{Club, Player};
use transfer_market::domain::value_objects::{Actor, Price};

/// Three clubs and one player owned by `b`.
pub struct Market {
    pub market: TransferMarket,
    pub a: Club,
    pub b: Club,
    pub c: Club,
    pub player: Player,
}

impl Market {
    pub fn actor(club: &Club) -> Actor {
        Actor::new(club.id())
    }

    pub fn admin_a(&self) -> Actor {
        Self::actor(&self.a)
    }

    pub fn admin_b(&self) -> Actor {
        Self::actor(&self.b)
    }

    pub fn admin_c(&self) -> Actor {
        Self::actor(&self.c)
    }

    pub async fn owner_of_player(&self) -> Player {
        self.market
            .store()
            .get_player(&self.player.id())
            .await
            .unwrap()
            .unwrap()
    }
}

pub async fn market_with(market: TransferMarket) -> Market {
    let a = market.register_club(Club::new("Arsenal", "England")).await.unwrap();
    let b = market.register_club(Club::new("Chelsea", "England")).await.unwrap();
    let c = market.register_club(Club::new("Liverpool", "England")).await.unwrap();
    let player = market
        .register_player(
            Player::new(
                "Cole Palmer",
                "AM",
                b.id(),
                Price::new(Decimal::from(120_000_000)).unwrap(),
            )
            .with_age(22)
            .with_nationality("England"),
        )
        .await
        .unwrap();

    Market {
        market,
        a,
        b,
        c,
        player,
    }
}

pub async fn market() -> Market {
    market_with(TransferMarket::in_memory()).await
}
