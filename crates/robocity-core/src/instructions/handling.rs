//! Moving items between the current place and the inventory, and using them.

use super::Operate;
use crate::{ExecutionContext, ExecutionError};

pub(super) fn pick(ctx: &mut ExecutionContext<'_>, id: &str) -> Result<(), ExecutionError> {
    if !ctx.navigation.exists_at_current_place(id) {
        return Err(ExecutionError::NotAtPlace { id: id.to_owned() });
    }
    if ctx.inventory.contains(id) {
        return Err(ExecutionError::AlreadyCarrying { id: id.to_owned() });
    }
    let item = ctx
        .navigation
        .pick_from_current_place(id)
        .ok_or_else(|| ExecutionError::NotAtPlace { id: id.to_owned() })?;
    ctx.inventory.add(item);
    ctx.inventory.notify_changed();
    ctx.navigation.update_place();
    ctx.robot
        .say_something(&format!("I am happy! Now I have {id}"));
    Ok(())
}

pub(super) fn drop(ctx: &mut ExecutionContext<'_>, id: &str) -> Result<(), ExecutionError> {
    if !ctx.inventory.contains(id) {
        return Err(ExecutionError::NotCarrying { id: id.to_owned() });
    }
    if ctx.navigation.exists_at_current_place(id) {
        return Err(ExecutionError::AlreadyAtPlace { id: id.to_owned() });
    }
    let item = ctx
        .inventory
        .remove(id)
        .ok_or_else(|| ExecutionError::NotCarrying { id: id.to_owned() })?;
    let dropped = item.id().to_owned();
    ctx.navigation.drop_at_current_place(item);
    ctx.inventory.notify_changed();
    ctx.robot
        .say_something(&format!("Great! I have dropped {dropped}"));
    Ok(())
}

pub(super) fn operate(
    ctx: &mut ExecutionContext<'_>,
    operate: &mut Operate,
) -> Result<(), ExecutionError> {
    let id = operate.id.as_str();
    let item = ctx
        .inventory
        .get_mut(id)
        .ok_or_else(|| ExecutionError::NotInInventory { id: id.to_owned() })?;
    if !item.use_item(ctx.robot, ctx.navigation) {
        return Err(ExecutionError::CannotUse { id: id.to_owned() });
    }
    let exhausted = !item.can_be_used();
    let snapshot = item.clone();
    if exhausted {
        ctx.robot
            .say_something(&format!("What a pity! I have no more {id} in my inventory"));
    }
    operate.used = Some(ctx.inventory.consume_if_exhausted(id).unwrap_or(snapshot));
    Ok(())
}

pub(super) fn operate_undo(
    ctx: &mut ExecutionContext<'_>,
    operate: &mut Operate,
) -> Result<(), ExecutionError> {
    let undone = match operate.used.as_mut() {
        Some(item) => item.use_undo(ctx.robot, ctx.navigation, ctx.inventory),
        None => false,
    };
    if !undone {
        return Err(ExecutionError::UndoFailed {
            id: operate.id.clone(),
        });
    }
    operate.used = None;
    Ok(())
}
