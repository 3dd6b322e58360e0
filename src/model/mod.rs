pub mod bedwars;
pub mod hypixel;
pub mod mojang;
pub mod prestige;
pub mod reply;
