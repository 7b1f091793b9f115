
mod item;
mod update;
