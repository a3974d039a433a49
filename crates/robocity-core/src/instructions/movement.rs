use crate::{ExecutionContext, ExecutionError, Rotation};

pub(super) fn move_forward(ctx: &mut ExecutionContext<'_>) -> Result<(), ExecutionError> {
    ctx.navigation.move_forward()?;
    let cost = ctx.robot.config().move_cost;
    ctx.robot.add_fuel(-cost);
    Ok(())
}

pub(super) fn move_back(ctx: &mut ExecutionContext<'_>) -> Result<(), ExecutionError> {
    ctx.navigation.move_undo()?;
    let cost = ctx.robot.config().move_cost;
    ctx.robot.add_fuel(cost);
    Ok(())
}

pub(super) fn turn(ctx: &mut ExecutionContext<'_>, rotation: Rotation) {
    ctx.navigation.rotate(rotation);
    let cost = ctx.robot.config().turn_cost;
    ctx.robot.add_fuel(-cost);
}

pub(super) fn turn_back(ctx: &mut ExecutionContext<'_>, rotation: Rotation) {
    ctx.navigation.rotate(rotation.opposite());
    let cost = ctx.robot.config().turn_cost;
    ctx.robot.add_fuel(cost);
}
