use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::{debug, info, trace};

use super::interval::{consume, TimeRange};
use super::weight::{CourseWeight, WeightStrategy};
use super::{
    Availability, CancelToken, Config, Day, FailedSession, GenerateError, Input, Output, Scheduler,
};
use crate::models::{CourseId, Room, ScheduledSession, SessionDemand};

/// Greedy schedule generator.
///
/// Courses are ordered by weight (heaviest first) so that demanding
/// courses claim scarce capacity early. Each session occurrence is then
/// placed on the operating day with the most remaining capacity for the
/// required room type, preferring days the course has not used yet.
pub struct GreedyScheduler {
    weight_strategy: Box<dyn WeightStrategy>,
}

impl GreedyScheduler {
    pub fn new(weight_strategy: impl WeightStrategy + 'static) -> Self {
        Self {
            weight_strategy: Box::new(weight_strategy),
        }
    }

    fn calculate_weights(
        &self,
        input: &Input,
        by_course: &HashMap<CourseId, Vec<&SessionDemand>>,
    ) -> Result<Vec<CourseWeight>, GenerateError> {
        let mut weights = Vec::with_capacity(input.courses.len());

        for course in &input.courses {
            let demands = by_course.get(&course.id).map_or(&[][..], Vec::as_slice);
            weights.push(CourseWeight {
                course_id: course.id,
                weight: self.weight_strategy.calculate(demands)?,
            });
        }

        Ok(weights)
    }
}

impl Scheduler for GreedyScheduler {
    fn generate(&self, input: &Input, cancel: &CancelToken) -> Result<Output, GenerateError> {
        let config = input.config.clone().unwrap_or_default();
        let operating_days: Vec<Day> =
            config.operating_days.iter().copied().unique().collect();

        info!(
            "generating schedule for {} courses ({} demands) across {} rooms",
            input.courses.len(),
            input.demands.len(),
            input.rooms.len()
        );

        let mut availability = init_availability(&input.rooms, &operating_days, &config);

        // heaviest courses first; stable sort keeps input order on ties
        let by_course: HashMap<CourseId, Vec<&SessionDemand>> = input
            .demands
            .iter()
            .map(|d| (d.course_id, d))
            .into_group_map();
        let mut weights = self.calculate_weights(input, &by_course)?;
        weights.sort_by_key(|cw| Reverse(cw.weight));

        // flatten into placement order: demands keep input order per course
        let ordered: Vec<&SessionDemand> = weights
            .iter()
            .filter_map(|cw| by_course.get(&cw.course_id))
            .flatten()
            .copied()
            .collect();

        let mut used_days: HashMap<CourseId, HashSet<Day>> = HashMap::new();
        let mut scheduled_sessions = Vec::new();
        let mut failures = Vec::new();

        for demand in ordered {
            let rooms_of_type = rooms_by_type(&input.rooms, &demand.required_room);
            let used = used_days.entry(demand.course_id).or_default();
            let mut remaining = demand.sessions_per_week;

            while remaining > 0 {
                if cancel.is_cancelled() {
                    return Err(GenerateError::Cancelled);
                }

                let candidate_days =
                    rank_days(&availability, &rooms_of_type, &operating_days);
                let mut placed = false;

                'days: for &day in &candidate_days {
                    // spread across days while enough untouched days remain
                    // for this demand; once they run out, reuse is allowed
                    let untouched = operating_days.len() - used.len();
                    if used.contains(&day) && remaining as usize <= untouched {
                        continue;
                    }

                    for room in &rooms_of_type {
                        let Some(ranges) = availability
                            .get_mut(&room.id)
                            .and_then(|days| days.get_mut(&day))
                        else {
                            continue;
                        };
                        let Some(start) =
                            find_first_fitting_slot(ranges, demand.duration, &config)
                        else {
                            continue;
                        };

                        let end = start + demand.duration;
                        // reserve the break along with the session itself
                        *ranges = consume(ranges, start, end + config.min_break_between_sessions);
                        used.insert(day);

                        trace!(
                            "placed course {} in room {} on day {} at {}..{}",
                            demand.course_id,
                            room.id,
                            u8::from(day),
                            start,
                            end
                        );
                        scheduled_sessions.push(ScheduledSession {
                            course_id: demand.course_id,
                            room_id: room.id,
                            day: u8::from(day),
                            start_time: start,
                            end_time: end,
                        });

                        remaining -= 1;
                        placed = true;
                        break 'days;
                    }
                }

                if !placed {
                    debug!(
                        "no slot for demand {} (course {}, {} min x{})",
                        demand.id, demand.course_id, demand.duration, demand.sessions_per_week
                    );
                    failures.push(FailedSession {
                        demand: demand.clone(),
                        reason: "no available time slot found".to_string(),
                    });
                    break;
                }
            }
        }

        info!(
            "schedule generated: {} sessions placed, {} demands failed",
            scheduled_sessions.len(),
            failures.len()
        );

        Ok(Output {
            scheduled_sessions,
            failures,
        })
    }
}

/// Every room starts each operating day fully free within operating hours.
fn init_availability(rooms: &[Room], operating_days: &[Day], config: &Config) -> Availability {
    let mut availability = Availability::new();

    for room in rooms {
        let days = operating_days
            .iter()
            .map(|&day| (day, vec![config.operating_hours]))
            .collect();
        availability.insert(room.id, days);
    }

    availability
}

fn rooms_by_type<'a>(rooms: &'a [Room], room_type: &str) -> Vec<&'a Room> {
    rooms.iter().filter(|r| r.room_type == room_type).collect()
}

/// Operating days ranked by total free minutes across the given rooms,
/// most capacity first; ties go to the lower day index.
fn rank_days(availability: &Availability, rooms: &[&Room], operating_days: &[Day]) -> Vec<Day> {
    let mut days = operating_days.to_vec();
    days.sort_by_key(|&day| (Reverse(total_free_minutes(availability, rooms, day)), day));
    days
}

fn total_free_minutes(availability: &Availability, rooms: &[&Room], day: Day) -> u32 {
    rooms
        .iter()
        .filter_map(|room| availability.get(&room.id).and_then(|days| days.get(&day)))
        .flatten()
        .map(TimeRange::duration)
        .sum()
}

/// First start at which `duration` fits in one of the free intervals.
///
/// With a preferred slot duration the start is rounded up to the next
/// grid boundary first; if the aligned start no longer fits but the
/// interval itself is long enough, the unaligned interval start is used.
fn find_first_fitting_slot(ranges: &[TimeRange], duration: u32, config: &Config) -> Option<u32> {
    let grid = config.preferred_slot_duration;

    for r in ranges {
        let start = if grid > 0 {
            r.start.next_multiple_of(grid)
        } else {
            r.start
        };

        if start + duration <= r.end {
            return Some(start);
        }

        if grid > 0 && r.duration() >= duration {
            return Some(r.start);
        }
    }

    None
}
