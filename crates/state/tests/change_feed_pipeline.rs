use std::sync::Arc;
use std::time::Duration;

use changefeed_events::{Event, EventBatch, EventBus, EventType, InMemoryEventBus, Topic};
use changefeed_state::{
    Change, ChangePublisher, ChangeSet, DeletePolicy, MessageType, Table, Translator,
    TranslatorConfig,
};
use changefeed_structs::{Allocation, Deployment, Evaluation, Job, Node};

fn test_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

fn publisher(policy: DeletePolicy) -> ChangePublisher<Arc<InMemoryEventBus>> {
    changefeed_observability::init();
    let config = TranslatorConfig::default().with_delete_policy(policy);
    ChangePublisher::new(Translator::new(config), Arc::new(InMemoryEventBus::new()))
}

/// A job registration followed by the plan that places it, as the store
/// would commit them.
fn register_and_place(job: &Arc<Job>, node: &Node) -> (ChangeSet, ChangeSet, Vec<Allocation>) {
    let eval = Evaluation::new(test_id(), &job.namespace, &job.id);
    let register = ChangeSet::new(
        MessageType::JobRegister,
        100,
        vec![
            Change::upsert(Table::Jobs, Arc::clone(job)),
            Change::upsert("job_summary", serde_json::json!({"JobID": job.id})),
            Change::upsert(Table::Evals, eval.clone()),
        ],
    );

    let deployment = Deployment::new(test_id(), &job.namespace, &job.id);
    let allocs: Vec<Allocation> = (0..2)
        .map(|i| {
            let mut alloc = Allocation::new(test_id(), &job.namespace, &job.id);
            alloc.name = format!("{}.web[{i}]", job.id);
            alloc.node_id = node.id.clone();
            alloc.eval_id = eval.id.clone();
            alloc.deployment_id = deployment.id.clone();
            alloc.job = Some(Arc::clone(job));
            alloc
        })
        .collect();

    let mut plan_changes: Vec<Change> = allocs
        .iter()
        .cloned()
        .map(|alloc| Change::upsert(Table::Allocs, alloc))
        .collect();
    plan_changes.push(Change::upsert(Table::Deployment, deployment));
    let plan = ChangeSet::new(MessageType::ApplyPlanResults, 101, plan_changes);

    (register, plan, allocs)
}

#[test]
fn subscriber_sees_batches_in_commit_order() -> anyhow::Result<()> {
    let publisher = publisher(DeletePolicy::DiscardBatch);
    let subscription = publisher.bus().subscribe();

    let job = Arc::new(Job::new("web", "default"));
    let node = Node::new(test_id(), "dc1");
    let (register, plan, allocs) = register_and_place(&job, &node);

    assert_eq!(publisher.publish(&register)?, 2);
    assert_eq!(publisher.publish(&plan)?, 3);

    let first = subscription.recv_timeout(Duration::from_secs(1))?;
    let second = subscription.recv_timeout(Duration::from_secs(1))?;

    assert_eq!(first.index().get(), 100);
    let topics: Vec<Topic> = first.iter().map(Event::topic).collect();
    assert_eq!(topics, vec![Topic::Job, Topic::Eval]);
    assert!(first.iter().all(|e| e.event_type() == EventType::JobRegistered));

    assert_eq!(second.index().get(), 101);
    let topics: Vec<Topic> = second.iter().map(Event::topic).collect();
    assert_eq!(topics, vec![Topic::Alloc, Topic::Alloc, Topic::Deployment]);
    for (event, alloc) in second.iter().zip(&allocs) {
        assert_eq!(event.key(), alloc.id);
        assert_eq!(event.filter_keys(), [alloc.job_id.clone(), alloc.deployment_id.clone()]);
        assert!(event.payload().as_allocation().is_some_and(|a| a.job.is_none()));
    }

    // The images handed to the translator still carry their job.
    assert!(allocs.iter().all(|a| a.job.is_some()));
    Ok(())
}

#[test]
fn published_batches_decode_to_typed_payloads() -> anyhow::Result<()> {
    let publisher = publisher(DeletePolicy::DiscardBatch);
    let subscription = publisher.bus().subscribe();

    let mut node = Node::new(test_id(), "dc1");
    node.status = "ready".to_string();
    let changes = ChangeSet::new(
        MessageType::NodeRegister,
        7,
        vec![Change::upsert(Table::Nodes, node.clone())],
    );
    publisher.publish(&changes)?;

    let batch = subscription.try_recv()?;
    let json = serde_json::to_string(&batch)?;
    let decoded: EventBatch = serde_json::from_str(&json)?;

    assert_eq!(decoded, batch);
    let event = &decoded.events()[0];
    assert_eq!(event.event_type(), EventType::NodeRegistration);
    assert_eq!(event.namespace(), None);
    assert_eq!(event.payload().as_node(), Some(&node));
    Ok(())
}

#[test]
fn delete_policy_decides_fate_of_mixed_change_set() -> anyhow::Result<()> {
    let job = Job::new("web", "default");
    let stale = Evaluation::new(test_id(), "default", "web");
    let changes = ChangeSet::new(
        MessageType::JobDeregister,
        55,
        vec![
            Change::update(Table::Jobs, job.clone(), job.clone()),
            Change::delete(Table::Evals, stale),
        ],
    );

    let discard = publisher(DeletePolicy::DiscardBatch);
    let discard_sub = discard.bus().subscribe();
    assert_eq!(discard.publish(&changes)?, 0);
    assert!(discard_sub.try_recv().is_err());

    let skip = publisher(DeletePolicy::SkipRecord);
    let skip_sub = skip.bus().subscribe();
    assert_eq!(skip.publish(&changes)?, 1);
    let batch = skip_sub.try_recv()?;
    assert_eq!(batch.events()[0].event_type(), EventType::JobDeregistered);
    assert_eq!(batch.events()[0].payload().as_job(), Some(&job));
    Ok(())
}
